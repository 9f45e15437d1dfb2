//! Directory-level extraction of SDTS containers and SRK blobs.
//!
//! - [`config`]: run configuration and error policy
//! - [`driver`]: walks a game directory and dispatches files
//! - [`output`]: output path layout and file writing

pub mod config;
pub mod driver;
pub mod output;

use std::path::PathBuf;
use thiserror::Error;

use crate::sdts::SdtsError;

pub use config::{ErrorPolicy, ExtractConfig, DEFAULT_OUTPUT_DIR, DEFAULT_PASSWORD};
pub use driver::{run, ExtractSummary};

/// Errors that stop an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Decoding or writing a single input file failed.
    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: SdtsError,
    },

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ExtractError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: impl Into<SdtsError>) -> Self {
        Self::File {
            path: path.into(),
            source: source.into(),
        }
    }
}
