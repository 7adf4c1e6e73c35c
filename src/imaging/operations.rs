//! High-level image operations.
//!
//! These functions prepare the filesystem, build parameters, and call the
//! backend.

use super::backend::{BackendError, ImageBackend};
use super::params::{DarkenParams, Darkening};
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// A dark variant that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Plan a dark variant without executing it.
pub fn plan_dark_variant(source: &Path, output: &Path, darkening: Darkening) -> DarkenParams {
    DarkenParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        darkening,
    }
}

/// Create a darkened copy of `source` at `output`.
///
/// The output's parent directory is created if missing (an existing
/// directory is fine). An existing output file is overwritten. If the source
/// cannot be decoded nothing is written.
pub fn create_dark_variant(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    darkening: Darkening,
) -> Result<GeneratedVariant> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let params = plan_dark_variant(source, output, darkening);
    let dims = backend.darken(&params)?;

    Ok(GeneratedVariant {
        source: params.source,
        output: params.output,
        width: dims.width,
        height: dims.height,
    })
}
