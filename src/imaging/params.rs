//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what files to produce) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`BrightnessFactor`] — Multiplier applied to every color channel (> 0, default 0.3).
//! - [`DarkeningStrategy`] — Which transform to use, as named in config and on the CLI.
//! - [`Darkening`] — A strategy resolved together with its factor.
//! - [`DarkenParams`] — Full specification for one variant: source, output, transform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Multiplier applied to each color channel.
///
/// Always finite and strictly positive. Values below 1 darken, values above
/// 1 brighten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessFactor(f32);

impl BrightnessFactor {
    pub const DEFAULT: f32 = 0.3;

    /// Returns `None` for zero, negative, NaN or infinite values.
    pub fn new(value: f32) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BrightnessFactor {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for BrightnessFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a factor from a CLI argument.
pub fn parse_factor(arg: &str) -> Result<BrightnessFactor, String> {
    let value: f32 = arg
        .parse()
        .map_err(|_| format!("'{arg}' is not a number"))?;
    BrightnessFactor::new(value).ok_or_else(|| format!("factor must be > 0, got {arg}"))
}

/// How a dark variant is derived from its source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DarkeningStrategy {
    /// Multiply every color channel by the brightness factor.
    #[default]
    BrightnessScale,
    /// Complement colors, halving strongly blue pixels instead.
    ChannelInvert,
}

/// A strategy with everything it needs to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Darkening {
    BrightnessScale(BrightnessFactor),
    ChannelInvert,
}

impl Darkening {
    pub fn new(strategy: DarkeningStrategy, factor: BrightnessFactor) -> Self {
        match strategy {
            DarkeningStrategy::BrightnessScale => Self::BrightnessScale(factor),
            DarkeningStrategy::ChannelInvert => Self::ChannelInvert,
        }
    }
}

impl Default for Darkening {
    fn default() -> Self {
        Self::BrightnessScale(BrightnessFactor::default())
    }
}

/// Parameters for producing one dark variant.
#[derive(Debug, Clone, PartialEq)]
pub struct DarkenParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub darkening: Darkening,
}
