//! Shared test utilities for the dark-variant test suite.
//!
//! Provides fixture writers for small synthetic images and a stock
//! `Assets.xcassets` tree matching the default configuration.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! setup_stock_assets(tmp.path());
//!
//! let dark = read_rgba(&tmp.path().join(STOCK_DARK_1X));
//! assert_eq!(dark.dimensions(), (16, 16));
//! ```

use image::{Rgba, RgbaImage};
use std::path::Path;

pub const STOCK_SOURCE_DIR: &str = "Assets.xcassets/SYSMLogo.imageset";
pub const STOCK_DARK_1X: &str = "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark.png";
pub const STOCK_DARK_2X: &str = "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark@2x.png";

// =========================================================================
// Image fixtures
// =========================================================================

/// Write a PNG where every pixel is `color`.
pub fn create_solid_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(path)
        .unwrap();
}

/// Write a PNG with varying color and alpha so per-channel math is exercised.
pub fn create_gradient_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 37 % 256) as u8,
            (255 - (x * 7 % 128)) as u8,
        ])
    })
    .save(path)
    .unwrap();
}

/// Decode an image file into RGBA8. Panics on failure.
pub fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()))
        .to_rgba8()
}

// =========================================================================
// Asset tree fixtures
// =========================================================================

/// Xcode-style `Contents.json` for a 1x/2x/3x imageset.
pub fn contents_json(stem: &str) -> String {
    format!(
        r#"{{
  "images" : [
    {{ "filename" : "{stem}.png", "idiom" : "universal", "scale" : "1x" }},
    {{ "filename" : "{stem}@2x.png", "idiom" : "universal", "scale" : "2x" }},
    {{ "idiom" : "universal", "scale" : "3x" }}
  ],
  "info" : {{ "author" : "xcode", "version" : 1 }}
}}
"#
    )
}

/// Create `Assets.xcassets/SYSMLogo.imageset/` with white 16px and 32px logos.
pub fn setup_stock_assets(root: &Path) {
    let dir = root.join(STOCK_SOURCE_DIR);
    std::fs::create_dir_all(&dir).unwrap();
    create_solid_png(&dir.join("SYSMLogo.png"), 16, 16, [255, 255, 255, 255]);
    create_solid_png(&dir.join("SYSMLogo@2x.png"), 32, 32, [255, 255, 255, 255]);
    std::fs::write(dir.join("Contents.json"), contents_json("SYSMLogo")).unwrap();
}
