//! CLI output formatting.
//!
//! Every generated file gets exactly one confirmation line:
//!
//! ```text
//! Created dark variant: Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark.png
//! ```
//!
//! Commands add a short header and summary around those lines:
//!
//! ```text
//! ==> Generating 2 dark variants (brightness-scale, factor 0.3)
//! Created dark variant: Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark.png
//! Created dark variant: Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark@2x.png
//! ==> Done: 2 files
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `String` or `Vec<String>`)
//! for testability and, where commands need it, a `print_*` wrapper that
//! writes to stdout. Format functions are pure — no I/O, no side effects.

use crate::imageset::ImagesetResult;
use crate::imaging::{Darkening, GeneratedVariant};
use std::path::Path;

/// Human-readable description of a transform.
pub fn describe_darkening(darkening: Darkening) -> String {
    match darkening {
        Darkening::BrightnessScale(factor) => format!("brightness-scale, factor {factor}"),
        Darkening::ChannelInvert => "channel-invert".to_string(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// The confirmation line for one written file.
pub fn format_created(variant: &GeneratedVariant) -> String {
    format!("Created dark variant: {}", variant.output.display())
}

pub fn print_created(variant: &GeneratedVariant) {
    println!("{}", format_created(variant));
}

/// Header printed before running configured jobs.
pub fn format_build_header(job_count: usize, darkening: Darkening) -> String {
    if job_count == 0 {
        return "==> No variants configured".to_string();
    }
    format!(
        "==> Generating {} ({})",
        plural(job_count, "dark variant", "dark variants"),
        describe_darkening(darkening)
    )
}

/// Summary printed after a run.
pub fn format_done(variants: &[GeneratedVariant]) -> String {
    format!("==> Done: {}", plural(variants.len(), "file", "files"))
}

/// Header printed before converting an imageset.
pub fn format_imageset_header(source: &Path, darkening: Darkening) -> String {
    format!(
        "==> Converting {} ({})",
        source.display(),
        describe_darkening(darkening)
    )
}

/// Summary lines after an imageset conversion.
pub fn format_imageset_summary(result: &ImagesetResult) -> Vec<String> {
    let mut lines = Vec::new();
    if result.contents_written {
        lines.push(format!(
            "    Contents.json → {}",
            result.dest.join("Contents.json").display()
        ));
    }
    lines.push(format!(
        "==> Done: {} in {}",
        plural(result.variants.len(), "file", "files"),
        result.dest.display()
    ));
    lines
}

pub fn print_imageset_summary(result: &ImagesetResult) {
    for line in format_imageset_summary(result) {
        println!("{}", line);
    }
}
