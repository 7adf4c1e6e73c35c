//! Filename conventions for dark variants.
//!
//! Asset catalogs name resolution variants with an `@Nx` scale marker between
//! the logical name and the extension. The dark suffix is inserted after the
//! logical name so the scale marker stays last:
//!
//! - `SYSMLogo.png` → `SYSMLogoDark.png`
//! - `SYSMLogo@2x.png` → `SYSMLogoDark@2x.png`
//! - `SYSMLogo.imageset` → `SYSMLogoDark.imageset`

/// Result of parsing an asset filename like `SYSMLogo@2x.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetName {
    /// Logical name without scale marker or extension (`SYSMLogo`).
    pub stem: String,
    /// Scale factor from an `@Nx` marker, if present (`Some(2)`).
    pub scale: Option<u32>,
    /// Extension without the dot, if present (`png`).
    pub extension: Option<String>,
}

impl AssetName {
    /// Reassemble the filename, e.g. `stem@2x.png`.
    pub fn to_file_name(&self) -> String {
        let mut name = self.stem.clone();
        if let Some(scale) = self.scale {
            name.push_str(&format!("@{scale}x"));
        }
        if let Some(ext) = &self.extension {
            name.push('.');
            name.push_str(ext);
        }
        name
    }
}

/// Parse an asset filename into stem, scale marker and extension.
///
/// - `"SYSMLogo@2x.png"` → stem="SYSMLogo", scale=Some(2), extension=Some("png")
/// - `"SYSMLogo.png"` → stem="SYSMLogo", scale=None, extension=Some("png")
/// - `"icon@large.png"` → stem="icon@large" (not a scale marker)
/// - `".hidden"` → stem=".hidden", extension=None
pub fn parse_asset_name(name: &str) -> AssetName {
    let (base, extension) = match name.rfind('.') {
        Some(dot) if dot > 0 => (&name[..dot], Some(name[dot + 1..].to_string())),
        _ => (name, None),
    };

    if let Some(at) = base.rfind('@') {
        let marker = &base[at + 1..];
        if let Some(scale) = marker.strip_suffix('x').and_then(|n| n.parse::<u32>().ok()) {
            return AssetName {
                stem: base[..at].to_string(),
                scale: Some(scale),
                extension,
            };
        }
    }

    AssetName {
        stem: base.to_string(),
        scale: None,
        extension,
    }
}

/// Name of the dark variant of an image file.
pub fn dark_file_name(name: &str, suffix: &str) -> String {
    let mut parsed = parse_asset_name(name);
    parsed.stem.push_str(suffix);
    parsed.to_file_name()
}

/// Name of the dark imageset directory (`Logo.imageset` → `LogoDark.imageset`).
///
/// Directories without an extension just get the suffix appended.
pub fn dark_imageset_name(name: &str, suffix: &str) -> String {
    match name.strip_suffix(".imageset") {
        Some(stem) => format!("{stem}{suffix}.imageset"),
        None => format!("{name}{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_name() {
        let p = parse_asset_name("SYSMLogo.png");
        assert_eq!(p.stem, "SYSMLogo");
        assert_eq!(p.scale, None);
        assert_eq!(p.extension.as_deref(), Some("png"));
    }

    #[test]
    fn parse_scale_marker() {
        let p = parse_asset_name("SYSMLogo@2x.png");
        assert_eq!(p.stem, "SYSMLogo");
        assert_eq!(p.scale, Some(2));
        assert_eq!(p.extension.as_deref(), Some("png"));
    }

    #[test]
    fn parse_non_numeric_marker_stays_in_stem() {
        let p = parse_asset_name("icon@large.png");
        assert_eq!(p.stem, "icon@large");
        assert_eq!(p.scale, None);
    }

    #[test]
    fn parse_without_extension() {
        let p = parse_asset_name("Logo@3x");
        assert_eq!(p.stem, "Logo");
        assert_eq!(p.scale, Some(3));
        assert_eq!(p.extension, None);
    }

    #[test]
    fn parse_dotfile_has_no_extension() {
        let p = parse_asset_name(".hidden");
        assert_eq!(p.stem, ".hidden");
        assert_eq!(p.extension, None);
    }

    #[test]
    fn to_file_name_roundtrips() {
        for name in ["SYSMLogo.png", "SYSMLogo@2x.png", "a.b.jpg", "Logo@3x"] {
            assert_eq!(parse_asset_name(name).to_file_name(), name);
        }
    }

    #[test]
    fn dark_name_standard_resolution() {
        assert_eq!(dark_file_name("SYSMLogo.png", "Dark"), "SYSMLogoDark.png");
    }

    #[test]
    fn dark_name_keeps_scale_marker_last() {
        assert_eq!(dark_file_name("SYSMLogo@2x.png", "Dark"), "SYSMLogoDark@2x.png");
    }

    #[test]
    fn dark_name_custom_suffix() {
        assert_eq!(dark_file_name("icon@3x.png", "-dark"), "icon-dark@3x.png");
    }

    #[test]
    fn dark_imageset_name_inserts_before_extension() {
        assert_eq!(
            dark_imageset_name("SYSMLogo.imageset", "Dark"),
            "SYSMLogoDark.imageset"
        );
        assert_eq!(dark_imageset_name("icons", "Dark"), "iconsDark");
    }
}
