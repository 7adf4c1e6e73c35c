//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the single operation every backend must
//! support: decode a source, transform it, and encode the result.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure Rust codecs.

use super::params::DarkenParams;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },
}

/// Pixel dimensions of a processed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode `params.source`, apply the darkening transform and write
    /// `params.output`. Returns the dimensions of the written image.
    ///
    /// The output's parent directory must already exist.
    fn darken(&self, params: &DarkenParams) -> Result<Dimensions, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::params::{BrightnessFactor, Darkening};
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub dimensions: Mutex<Vec<Dimensions>>,
        /// Source paths whose darken call should fail to decode.
        pub failing_sources: Vec<String>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Darken {
            source: String,
            output: String,
            darkening: Darkening,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                dimensions: Mutex::new(dims),
                ..Self::default()
            }
        }

        pub fn failing_on(sources: &[&str]) -> Self {
            Self {
                failing_sources: sources.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn next_dimensions(&self) -> Dimensions {
            self.dimensions.lock().unwrap().pop().unwrap_or(Dimensions {
                width: 1,
                height: 1,
            })
        }
    }

    impl ImageBackend for MockBackend {
        fn darken(&self, params: &DarkenParams) -> Result<Dimensions, BackendError> {
            let source = params.source.to_string_lossy().to_string();
            self.operations.lock().unwrap().push(RecordedOp::Darken {
                source: source.clone(),
                output: params.output.to_string_lossy().to_string(),
                darkening: params.darkening,
            });

            if self.failing_sources.iter().any(|s| source.ends_with(s)) {
                return Err(BackendError::Decode {
                    path: params.source.clone(),
                    reason: "mock decode failure".into(),
                });
            }
            Ok(self.next_dimensions())
        }
    }

    #[test]
    fn mock_returns_queued_dimensions() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 64,
            height: 32,
        }]);

        let dims = backend
            .darken(&DarkenParams {
                source: "/test/logo.png".into(),
                output: "/test/out.png".into(),
                darkening: Darkening::ChannelInvert,
            })
            .unwrap();
        assert_eq!(dims.width, 64);
        assert_eq!(dims.height, 32);
    }

    #[test]
    fn mock_records_darken() {
        let backend = MockBackend::new();
        let factor = BrightnessFactor::new(0.5).unwrap();

        backend
            .darken(&DarkenParams {
                source: "/logo.png".into(),
                output: "/logo-dark.png".into(),
                darkening: Darkening::BrightnessScale(factor),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(
            ops,
            vec![RecordedOp::Darken {
                source: "/logo.png".into(),
                output: "/logo-dark.png".into(),
                darkening: Darkening::BrightnessScale(factor),
            }]
        );
    }

    #[test]
    fn mock_fails_on_configured_source() {
        let backend = MockBackend::failing_on(&["broken.png"]);
        let result = backend.darken(&DarkenParams {
            source: "/a/broken.png".into(),
            output: "/b/out.png".into(),
            darkening: Darkening::default(),
        });
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn decode_error_names_path() {
        let err = BackendError::Decode {
            path: "/missing.png".into(),
            reason: "No such file".into(),
        };
        assert_eq!(err.to_string(), "Failed to decode /missing.png: No such file");
    }
}
