//! Tool configuration module.
//!
//! Handles loading, validating, and merging `dark-variant.toml`. Stock
//! defaults reproduce the classic two-logo job, so running `dark-variant build`
//! with no config file at all generates:
//!
//! ```text
//! Assets.xcassets/
//! ├── SYSMLogo.imageset/
//! │   ├── SYSMLogo.png           (input)
//! │   └── SYSMLogo@2x.png        (input)
//! └── SYSMLogoDark.imageset/     (created)
//!     ├── SYSMLogoDark.png
//!     └── SYSMLogoDark@2x.png
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! factor = 0.3                  # Brightness multiplier (> 0)
//! strategy = "brightness-scale" # or "channel-invert"
//! suffix = "Dark"               # Inserted into generated file names
//!
//! [[variants]]
//! input = "Assets.xcassets/SYSMLogo.imageset/SYSMLogo.png"
//! output = "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark.png"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: set just the keys you want. Every top-level key is
//! a scalar or the `variants` list, and a key present in the file replaces its
//! default outright. Listing any `[[variants]]` replaces both stock jobs.
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{BrightnessFactor, Darkening, DarkeningStrategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up relative to `--root`.
pub const CONFIG_FILE_NAME: &str = "dark-variant.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `dark-variant.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Brightness multiplier for the `brightness-scale` strategy.
    pub factor: f32,
    /// How dark variants are derived.
    pub strategy: DarkeningStrategy,
    /// Inserted after the logical name when deriving dark file names.
    pub suffix: String,
    /// Explicit input → output jobs run by `build`.
    pub variants: Vec<VariantJob>,
}

/// One configured input → output pair. Paths are relative to the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantJob {
    pub input: String,
    pub output: String,
}

impl VariantJob {
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            factor: BrightnessFactor::DEFAULT,
            strategy: DarkeningStrategy::default(),
            suffix: "Dark".to_string(),
            variants: vec![
                VariantJob::new(
                    "Assets.xcassets/SYSMLogo.imageset/SYSMLogo.png",
                    "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark.png",
                ),
                VariantJob::new(
                    "Assets.xcassets/SYSMLogo.imageset/SYSMLogo@2x.png",
                    "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark@2x.png",
                ),
            ],
        }
    }
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.brightness_factor()?;
        if self.suffix.is_empty() {
            return Err(ConfigError::Validation("suffix must not be empty".into()));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "suffix must not contain path separators".into(),
            ));
        }
        for (i, job) in self.variants.iter().enumerate() {
            if job.input.is_empty() || job.output.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "variants[{i}] needs both input and output"
                )));
            }
        }
        Ok(())
    }

    pub fn brightness_factor(&self) -> Result<BrightnessFactor, ConfigError> {
        BrightnessFactor::new(self.factor).ok_or_else(|| {
            ConfigError::Validation(format!(
                "factor must be a finite number > 0, got {}",
                self.factor
            ))
        })
    }

    /// The configured strategy resolved with its factor.
    pub fn darkening(&self) -> Result<Darkening, ConfigError> {
        Ok(Darkening::new(self.strategy, self.brightness_factor()?))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// The stock defaults as a TOML table, the base layer user keys are laid over.
pub fn stock_defaults() -> toml::Table {
    match toml::Value::try_from(ToolConfig::default()) {
        Ok(toml::Value::Table(table)) => table,
        other => unreachable!("ToolConfig serializes to a table, got {other:?}"),
    }
}

/// Lay user keys over the defaults.
///
/// Top-level keys only: the schema has no nested tables, and `variants` is
/// a list that the user either keeps or replaces as a whole.
pub fn apply_overrides(mut defaults: toml::Table, overrides: toml::Table) -> toml::Table {
    for (key, value) in overrides {
        defaults.insert(key, value);
    }
    defaults
}

/// Read a config file's keys. `Ok(None)` when the file does not exist.
pub fn read_overrides(path: &Path) -> Result<Option<toml::Table>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Apply optional overrides, deserialize, and validate.
pub fn resolve_config(
    defaults: toml::Table,
    overrides: Option<toml::Table>,
) -> Result<ToolConfig, ConfigError> {
    let merged = match overrides {
        Some(overrides) => apply_overrides(defaults, overrides),
        None => defaults,
    };
    let config: ToolConfig = toml::Value::Table(merged).try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    let overrides = read_overrides(path)?;
    if overrides.is_none() {
        log::debug!("no config at {}, using stock defaults", path.display());
    }
    resolve_config(stock_defaults(), overrides)
}

/// Returns a fully-commented stock `dark-variant.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# dark-variant Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Brightness multiplier applied to every color channel.
# Must be greater than 0. Values below 1 darken, above 1 brighten.
# Scaled values are rounded to the nearest integer and clamped.
factor = 0.3

# How dark variants are derived:
#   "brightness-scale"  multiply each channel by `factor`
#   "channel-invert"    complement colors; strongly blue pixels are halved
#                       instead, keeping them blue. `factor` is ignored.
strategy = "brightness-scale"

# Inserted after the logical file name when `imageset` derives names:
#   SYSMLogo@2x.png -> SYSMLogoDark@2x.png
suffix = "Dark"

# ---------------------------------------------------------------------------
# Jobs run by `dark-variant build`
# ---------------------------------------------------------------------------
# Paths are relative to --root. Output directories are created as needed,
# existing output files are overwritten. Listing any [[variants]] replaces
# this default list.

[[variants]]
input = "Assets.xcassets/SYSMLogo.imageset/SYSMLogo.png"
output = "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark.png"

[[variants]]
input = "Assets.xcassets/SYSMLogo.imageset/SYSMLogo@2x.png"
output = "Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark@2x.png"
"##
}
