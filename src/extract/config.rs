use std::path::PathBuf;

use crate::sdts::EntryCatalog;

/// Password used when none is given on the command line.
///
/// This is the engine's well-known default and offers no protection. It is
/// kept only so that unmodified game directories extract without extra flags.
pub const DEFAULT_PASSWORD: &str = "key";

/// Output directory used when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// What to do when one input file fails to decode.
///
/// Only decode and write failures of `data.dts`/`*.srk` inputs are subject to
/// the policy. Unreadable directories found while walking are always logged
/// and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failing file. Files extracted before
    /// it stay on disk.
    #[default]
    Abort,
    /// Log the failure, remember the path and continue with the next file.
    SkipAndLog,
}

/// Everything an extraction run needs. There is no other global state.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Directory scanned recursively for `data.dts` and `*.srk` files.
    pub root: PathBuf,
    pub password: Option<String>,
    pub output: PathBuf,
    pub policy: ErrorPolicy,
    /// Worker threads for decoding entries. `0` lets rayon decide.
    pub jobs: usize,
    pub catalog: EntryCatalog,
}

impl ExtractConfig {
    /// A configuration with the default password, catalog and abort policy.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            password: Some(DEFAULT_PASSWORD.to_string()),
            output: output.into(),
            policy: ErrorPolicy::default(),
            jobs: 0,
            catalog: EntryCatalog::default(),
        }
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_catalog(mut self, catalog: EntryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub(crate) fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
