//! Driver for the configured variant jobs.
//!
//! Runs every `[[variants]]` entry from the config, in order, with the same
//! darkening transform. Relative job paths are resolved against the root
//! directory. The first failure stops the run; variants already written stay
//! on disk.

use crate::config::{ToolConfig, VariantJob};
use crate::imaging::{BackendError, Darkening, GeneratedVariant, ImageBackend, create_dark_variant};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VariantsError {
    #[error("Variant {index} ({}): {source}", input.display())]
    Job {
        index: usize,
        input: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// A job with its paths resolved against the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolve job paths against `root`. Absolute paths are kept as-is.
pub fn resolve_jobs(root: &Path, jobs: &[VariantJob]) -> Vec<ResolvedJob> {
    jobs.iter()
        .map(|job| ResolvedJob {
            input: root.join(&job.input),
            output: root.join(&job.output),
        })
        .collect()
}

/// Generate every configured dark variant.
///
/// `on_created` is called right after each file is written, so progress is
/// reported even when a later job fails.
pub fn generate_variants(
    backend: &impl ImageBackend,
    root: &Path,
    config: &ToolConfig,
    darkening: Darkening,
    mut on_created: impl FnMut(&GeneratedVariant),
) -> Result<Vec<GeneratedVariant>, VariantsError> {
    let jobs = resolve_jobs(root, &config.variants);
    log::debug!("running {} variant job(s) with {darkening:?}", jobs.len());

    let mut generated = Vec::with_capacity(jobs.len());
    for (index, job) in jobs.into_iter().enumerate() {
        let variant = create_dark_variant(backend, &job.input, &job.output, darkening)
            .map_err(|source| VariantsError::Job {
                index,
                input: job.input.clone(),
                source,
            })?;
        on_created(&variant);
        generated.push(variant);
    }
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::RustBackend;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_jobs_joins_root() {
        let jobs = resolve_jobs(Path::new("/project"), &ToolConfig::default().variants);
        assert_eq!(
            jobs[0].input,
            PathBuf::from("/project/Assets.xcassets/SYSMLogo.imageset/SYSMLogo.png")
        );
        assert_eq!(
            jobs[1].output,
            PathBuf::from("/project/Assets.xcassets/SYSMLogoDark.imageset/SYSMLogoDark@2x.png")
        );
    }

    #[test]
    fn resolve_jobs_keeps_absolute_paths() {
        let jobs = resolve_jobs(
            Path::new("/project"),
            &[VariantJob::new("/abs/in.png", "rel/out.png")],
        );
        assert_eq!(jobs[0].input, PathBuf::from("/abs/in.png"));
        assert_eq!(jobs[0].output, PathBuf::from("/project/rel/out.png"));
    }

    #[test]
    fn generate_runs_jobs_in_order_with_same_darkening() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();
        let config = ToolConfig::default();
        let darkening = config.darkening().unwrap();

        let generated =
            generate_variants(&backend, tmp.path(), &config, darkening, |_| {}).unwrap();

        assert_eq!(generated.len(), 2);
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(
            &ops[0],
            RecordedOp::Darken { source, darkening: d, .. }
                if source.ends_with("SYSMLogo.png") && *d == darkening
        ));
        assert!(matches!(
            &ops[1],
            RecordedOp::Darken { source, darkening: d, .. }
                if source.ends_with("SYSMLogo@2x.png") && *d == darkening
        ));
    }

    #[test]
    fn generate_reports_each_created_file() {
        let tmp = TempDir::new().unwrap();
        let mut seen = Vec::new();

        generate_variants(
            &MockBackend::new(),
            tmp.path(),
            &ToolConfig::default(),
            Darkening::default(),
            |v| seen.push(v.output.clone()),
        )
        .unwrap();

        assert_eq!(
            seen,
            vec![tmp.path().join(STOCK_DARK_1X), tmp.path().join(STOCK_DARK_2X)]
        );
    }

    #[test]
    fn generate_stops_at_first_failure() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::failing_on(&["SYSMLogo.png"]);
        let mut created = 0;

        let result = generate_variants(
            &backend,
            tmp.path(),
            &ToolConfig::default(),
            Darkening::default(),
            |_| created += 1,
        );

        assert!(matches!(result, Err(VariantsError::Job { index: 0, .. })));
        assert_eq!(created, 0);
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn generate_with_no_jobs_is_empty() {
        let tmp = TempDir::new().unwrap();
        let config = ToolConfig {
            variants: Vec::new(),
            ..ToolConfig::default()
        };
        let generated = generate_variants(
            &MockBackend::new(),
            tmp.path(),
            &config,
            Darkening::default(),
            |_| {},
        )
        .unwrap();
        assert!(generated.is_empty());
    }

    #[test]
    fn generate_stock_assets_end_to_end() {
        let tmp = TempDir::new().unwrap();
        setup_stock_assets(tmp.path());

        let generated = generate_variants(
            &RustBackend::new(),
            tmp.path(),
            &ToolConfig::default(),
            Darkening::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!((generated[0].width, generated[0].height), (16, 16));
        assert_eq!((generated[1].width, generated[1].height), (32, 32));
        for rel in [STOCK_DARK_1X, STOCK_DARK_2X] {
            let img = read_rgba(&tmp.path().join(rel));
            assert!(img.pixels().all(|p| p.0 == [77, 77, 77, 255]));
        }
    }

    #[test]
    fn generate_twice_with_existing_directory() {
        let tmp = TempDir::new().unwrap();
        setup_stock_assets(tmp.path());
        let config = ToolConfig::default();

        for _ in 0..2 {
            generate_variants(
                &RustBackend::new(),
                tmp.path(),
                &config,
                Darkening::default(),
                |_| {},
            )
            .unwrap();
        }
        assert!(tmp.path().join(STOCK_DARK_2X).is_file());
    }
}
