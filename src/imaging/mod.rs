//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` |
//! | **Brightness scale** | per-channel multiply, round, clamp |
//! | **Channel invert** | complement, keeping strong blues |
//! | **Encode** | `image` codecs chosen by output extension |
//!
//! The module is split into:
//! - **Calculations**: Pure per-channel math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining filesystem prep + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{Channel, invert_color, scale_channel, scale_color};
pub use operations::{GeneratedVariant, create_dark_variant, plan_dark_variant};
pub use params::{
    BrightnessFactor, DarkenParams, Darkening, DarkeningStrategy, parse_factor,
};
pub use rust_backend::{RustBackend, is_supported_image, supported_extensions};
