//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image::ImageReader` (pure Rust decoders) |
//! | Brightness scale / invert | per-pixel loop over the native buffer, math in [`calculations`](super::calculations) |
//! | Encode | `image::DynamicImage::write_to` into memory, format from the output extension |
//!
//! The transform runs on the decoded buffer in its native color type, so a
//! 16-bit grayscale PNG comes out as a 16-bit grayscale PNG.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{Channel, invert_color, scale_color};
use super::params::{DarkenParams, Darkening};
use image::{ColorType, DynamicImage, ImageBuffer, ImageError, ImageFormat, ImageReader, Pixel};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions we can both decode and encode with the compiled-in codecs.
const FORMAT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    FORMAT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled() && fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the image file extensions that have working codecs compiled in.
pub fn supported_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` is a file with a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| supported_extensions().contains(&ext.as_str()))
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// A missing or unreadable file is reported as a decode failure: from the
/// caller's point of view the source simply is not a usable image.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let decode_error = |reason: String| BackendError::Decode {
        path: path.to_path_buf(),
        reason,
    };
    let img = ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Apply the darkening transform in place, keeping the image's color type.
pub(crate) fn apply_darkening(img: &mut DynamicImage, darkening: Darkening) {
    match img {
        DynamicImage::ImageLuma8(buf) => transform_buffer(buf, 1, darkening),
        DynamicImage::ImageLumaA8(buf) => transform_buffer(buf, 1, darkening),
        DynamicImage::ImageRgb8(buf) => transform_buffer(buf, 3, darkening),
        DynamicImage::ImageRgba8(buf) => transform_buffer(buf, 3, darkening),
        DynamicImage::ImageLuma16(buf) => transform_buffer(buf, 1, darkening),
        DynamicImage::ImageLumaA16(buf) => transform_buffer(buf, 1, darkening),
        DynamicImage::ImageRgb16(buf) => transform_buffer(buf, 3, darkening),
        DynamicImage::ImageRgba16(buf) => transform_buffer(buf, 3, darkening),
        DynamicImage::ImageRgb32F(buf) => transform_buffer(buf, 3, darkening),
        DynamicImage::ImageRgba32F(buf) => transform_buffer(buf, 3, darkening),
        other => {
            let mut rgba = other.to_rgba8();
            transform_buffer(&mut rgba, 3, darkening);
            *other = DynamicImage::ImageRgba8(rgba);
        }
    }
}

/// Transform the first `color_channels` channels of every pixel; the rest (alpha) is left alone.
fn transform_buffer<P>(
    buffer: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    color_channels: usize,
    darkening: Darkening,
) where
    P: Pixel,
    P::Subpixel: Channel,
{
    for pixel in buffer.pixels_mut() {
        let color = &mut pixel.channels_mut()[..color_channels];
        match darkening {
            Darkening::BrightnessScale(factor) => scale_color(color, factor.value()),
            Darkening::ChannelInvert => invert_color(color),
        }
    }
}

/// Narrow the color type to something the target encoder accepts.
///
/// JPEG has no alpha and no 16-bit mode, the WebP encoder only takes 8-bit
/// channels, TIFF has no gray+alpha mode, and PNG has no float mode.
fn encodable_for(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    let color = img.color();
    match format {
        ImageFormat::Jpeg if !matches!(color, ColorType::Rgb8 | ColorType::L8) => {
            DynamicImage::ImageRgb8(img.to_rgb8())
        }
        ImageFormat::WebP
            if !matches!(
                color,
                ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
            ) =>
        {
            DynamicImage::ImageRgba8(img.to_rgba8())
        }
        ImageFormat::Tiff if color == ColorType::La8 => DynamicImage::ImageRgba8(img.to_rgba8()),
        ImageFormat::Tiff if color == ColorType::La16 => {
            DynamicImage::ImageRgba16(img.to_rgba16())
        }
        ImageFormat::Png if matches!(color, ColorType::Rgb32F | ColorType::Rgba32F) => {
            DynamicImage::ImageRgba16(img.to_rgba16())
        }
        _ => img,
    }
}

/// Save an image to the given path, inferring format from extension.
///
/// The image is encoded in memory first; the file is only created once
/// encoding succeeded. Existing files are overwritten.
fn save_image(img: DynamicImage, path: &Path) -> Result<(), BackendError> {
    let encode_error = |reason: String| BackendError::Encode {
        path: path.to_path_buf(),
        reason,
    };
    let format = ImageFormat::from_path(path).map_err(|e| encode_error(e.to_string()))?;
    if !format.writing_enabled() {
        return Err(encode_error(format!("no encoder for {format:?}")));
    }

    let img = encodable_for(img, format);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|e| match e {
            ImageError::IoError(io) => BackendError::Io(io),
            other => encode_error(other.to_string()),
        })?;
    fs::write(path, &bytes)?;
    log::debug!(
        "encoded {} as {format:?} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(())
}

impl ImageBackend for RustBackend {
    fn darken(&self, params: &DarkenParams) -> Result<Dimensions, BackendError> {
        let mut img = load_image(&params.source)?;
        apply_darkening(&mut img, params.darkening);
        let dims = Dimensions {
            width: img.width(),
            height: img.height(),
        };
        save_image(img, &params.output)?;
        Ok(dims)
    }
}
