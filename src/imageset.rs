//! Whole-imageset conversion.
//!
//! An asset catalog imageset is a directory holding every resolution of one
//! logical image plus a `Contents.json` that names them:
//!
//! ```text
//! SYSMLogo.imageset/              SYSMLogoDark.imageset/
//! ├── Contents.json        →      ├── Contents.json      (filenames rewritten)
//! ├── SYSMLogo.png         →      ├── SYSMLogoDark.png
//! └── SYSMLogo@2x.png      →      └── SYSMLogoDark@2x.png
//! ```
//!
//! Every supported image in the source directory gets a dark variant, named
//! by [`naming::dark_file_name`](crate::naming::dark_file_name). Entries in
//! `Contents.json` keep all their other keys.

use crate::imaging::{
    BackendError, Darkening, GeneratedVariant, ImageBackend, create_dark_variant,
    is_supported_image,
};
use crate::naming::{dark_file_name, dark_imageset_name};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONTENTS_FILE: &str = "Contents.json";

#[derive(Error, Debug)]
pub enum ImagesetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("Invalid Contents.json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("No images found in {0}")]
    NoImages(PathBuf),
    #[error("Cannot derive a destination name from {0}; pass --dest")]
    NoDestName(PathBuf),
}

/// Outcome of converting one imageset.
#[derive(Debug, Clone)]
pub struct ImagesetResult {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub variants: Vec<GeneratedVariant>,
    /// Whether a rewritten `Contents.json` was written to `dest`.
    pub contents_written: bool,
}

/// Sibling directory for the dark imageset (`a/Logo.imageset` → `a/LogoDark.imageset`).
pub fn default_dest(source: &Path, suffix: &str) -> Option<PathBuf> {
    let name = source.file_name()?.to_str()?;
    Some(source.with_file_name(dark_imageset_name(name, suffix)))
}

/// Supported image files directly inside `dir`, sorted by name. Hidden files are skipped.
fn collect_images(dir: &Path) -> Result<Vec<PathBuf>, ImagesetError> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.starts_with('.') || name == CONTENTS_FILE {
            continue;
        }
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        } else {
            log::warn!("skipping {}: not a supported image", path.display());
        }
    }
    images.sort();
    Ok(images)
}

/// The rewritten `Contents.json` of `source`, or `None` if it has none.
fn read_contents(source: &Path, suffix: &str) -> Result<Option<String>, ImagesetError> {
    let contents_path = source.join(CONTENTS_FILE);
    if !contents_path.is_file() {
        log::debug!("{} has no {CONTENTS_FILE}", source.display());
        return Ok(None);
    }
    let mut contents: Value = serde_json::from_str(&fs::read_to_string(&contents_path)?)?;
    rewrite_contents(&mut contents, suffix);
    let mut json = serde_json::to_string_pretty(&contents)?;
    json.push('\n');
    Ok(Some(json))
}

/// Rewrite every `"filename"` string in a `Contents.json` document.
pub fn rewrite_contents(value: &mut Value, suffix: &str) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                match child {
                    Value::String(name) if key == "filename" => {
                        *name = dark_file_name(name, suffix);
                    }
                    other => rewrite_contents(other, suffix),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_contents(item, suffix);
            }
        }
        _ => {}
    }
}

/// Create the dark counterpart of an imageset directory.
///
/// `dest` defaults to [`default_dest`] of the source (canonicalized when the
/// path has no final component, like `.`). `on_created` is called after each
/// image is written.
///
/// `Contents.json` is parsed before anything is written, so a malformed
/// manifest leaves no partial imageset behind.
pub fn create_dark_imageset(
    backend: &impl ImageBackend,
    source: &Path,
    dest: Option<&Path>,
    darkening: Darkening,
    suffix: &str,
    mut on_created: impl FnMut(&GeneratedVariant),
) -> Result<ImagesetResult, ImagesetError> {
    if !source.is_dir() {
        return Err(ImagesetError::NotADirectory(source.to_path_buf()));
    }
    let dest = match dest {
        Some(d) => d.to_path_buf(),
        None => {
            let named = match source.file_name() {
                Some(_) => source.to_path_buf(),
                None => source.canonicalize()?,
            };
            default_dest(&named, suffix).ok_or(ImagesetError::NoDestName(named))?
        }
    };

    let images = collect_images(source)?;
    if images.is_empty() {
        return Err(ImagesetError::NoImages(source.to_path_buf()));
    }
    let contents = read_contents(source, suffix)?;

    fs::create_dir_all(&dest)?;
    let mut variants = Vec::with_capacity(images.len());
    for image in images {
        let name = image
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let output = dest.join(dark_file_name(&name, suffix));
        let variant = create_dark_variant(backend, &image, &output, darkening)?;
        on_created(&variant);
        variants.push(variant);
    }

    let contents_written = match contents {
        Some(json) => {
            fs::write(dest.join(CONTENTS_FILE), json)?;
            true
        }
        None => false,
    };

    Ok(ImagesetResult {
        source: source.to_path_buf(),
        dest,
        variants,
        contents_written,
    })
}
