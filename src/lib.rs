//! # dark-variant
//!
//! Generates "dark mode" variants of image assets. Each variant is a copy of
//! its source with every color channel scaled by a brightness factor
//! (0.3 by default), written next to the original asset catalog entries.
//!
//! # Pipeline
//!
//! ```text
//! read → decode → darken → encode → write
//! ```
//!
//! One image at a time, synchronously. The decoded buffer lives only for the
//! duration of a single [`imaging::create_dark_variant`] call.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pure-Rust decode, transform and encode behind the [`imaging::ImageBackend`] trait |
//! | [`variants`] | Runs the configured `[[variants]]` jobs |
//! | [`imageset`] | Converts a whole `.imageset` directory including `Contents.json` |
//! | [`naming`] | `Logo@2x.png` → `LogoDark@2x.png` naming convention |
//! | [`config`] | `dark-variant.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Native Color Types
//!
//! The transform runs on the decoded buffer as-is. A grayscale PNG stays
//! grayscale, a 16-bit PNG stays 16-bit, and alpha is never touched. Only the
//! encoder boundary narrows color types, and only when the target format
//! cannot represent the source (JPEG has no alpha).
//!
//! ## Round to Nearest
//!
//! Scaled channel values are rounded half away from zero, then clamped. White
//! at the default factor becomes 77, not 76. The rule is the same for every
//! integer bit depth, so output is reproducible across runs and platforms.
//!
//! ## Configuration Over Hardcoded Paths
//!
//! The stock configuration reproduces the classic job (two `SYSMLogo`
//! resolutions into `SYSMLogoDark.imageset`) so `dark-variant build` works
//! with no config file. Any project can swap in its own jobs with a
//! `dark-variant.toml`.

pub mod config;
pub mod imageset;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod variants;

#[cfg(test)]
pub(crate) mod test_helpers;
