//! Walks a game directory and extracts every container and blob it finds.
//!
//! - `data.dts` files are decoded as SDTS containers, one entry per worker
//! - `*.srk` files are decrypted whole
//! - everything else is ignored

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use walkdir::WalkDir;

use super::config::{ErrorPolicy, ExtractConfig};
use super::output::{self, GroupDirs};
use super::ExtractError;
use crate::sdts::blob;
use crate::sdts::types::models::EntrySpan;
use crate::sdts::{Result, SdtsError, SdtsReader};

/// File name of SDTS containers.
pub const CONTAINER_FILE_NAME: &str = "data.dts";

/// File name suffix of SRK blobs.
pub const BLOB_SUFFIX: &str = ".srk";

/// The kind of input a file is treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Container,
    Blob,
}

/// Classifies a file by name. Returns `None` for files the driver ignores.
pub fn classify(path: &Path) -> Option<InputKind> {
    let name = path.file_name()?.to_str()?;
    if name == CONTAINER_FILE_NAME {
        Some(InputKind::Container)
    } else if name.ends_with(BLOB_SUFFIX) {
        Some(InputKind::Blob)
    } else {
        None
    }
}

/// Counters for a finished run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub containers: usize,
    pub blobs: usize,
    /// Resources written across all containers.
    pub resources: usize,
    /// Inputs that failed under [`ErrorPolicy::SkipAndLog`].
    pub failed: Vec<PathBuf>,
    /// Paths the directory walk could not read. These never abort a run.
    pub walk_errors: usize,
}

/// Extracts everything under `config.root` into `config.output`.
///
/// Files are visited in a deterministic (sorted) order. What happens on a
/// failing file is decided by `config.policy`. Unreadable directories are
/// logged and skipped under every policy, a missing root included.
pub fn run(config: &ExtractConfig) -> std::result::Result<ExtractSummary, ExtractError> {
    let pool = ThreadPoolBuilder::new().num_threads(config.jobs).build()?;
    fs::create_dir_all(&config.output).map_err(|e| ExtractError::file(&config.output, e))?;

    info!(
        "Scanning {} (output: {})",
        config.root.display(),
        config.output.display()
    );

    let mut summary = ExtractSummary::default();
    for dir_entry in WalkDir::new(&config.root).sort_by_file_name() {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                summary.walk_errors += 1;
                continue;
            }
        };
        if !dir_entry.file_type().is_file() {
            continue;
        }

        let path = dir_entry.path();
        let result = match classify(path) {
            Some(InputKind::Container) => extract_container(path, config, &pool).map(|count| {
                summary.containers += 1;
                summary.resources += count;
            }),
            Some(InputKind::Blob) => {
                let relative_dir = path
                    .parent()
                    .and_then(|parent| parent.strip_prefix(&config.root).ok())
                    .unwrap_or_else(|| Path::new(""));
                extract_blob(path, relative_dir, config).map(|_| summary.blobs += 1)
            }
            None => continue,
        };

        if let Err(source) = result {
            let err = ExtractError::file(path, source);
            match config.policy {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::SkipAndLog => {
                    warn!("Skipping {}", err);
                    summary.failed.push(path.to_path_buf());
                }
            }
        }
    }

    info!(
        "Extraction finished: {} containers ({} resources), {} blobs, {} failed",
        summary.containers,
        summary.resources,
        summary.blobs,
        summary.failed.len()
    );
    Ok(summary)
}

/// Decodes one container and writes all of its resources.
///
/// Entries are decoded in parallel on `pool`. The first failing entry stops
/// scheduling of the remaining ones. Returns the number of files written.
pub fn extract_container(path: &Path, config: &ExtractConfig, pool: &ThreadPool) -> Result<usize> {
    info!("Extracting container {}", path.display());
    let buf = fs::read(path)?;
    let reader = SdtsReader::open(&buf, &config.catalog, config.password())?;

    let counts = pool.install(|| {
        reader
            .entries()
            .par_iter()
            .map(|entry| extract_entry(&reader, entry, &config.output))
            .collect::<Result<Vec<usize>>>()
    })?;
    Ok(counts.into_iter().sum())
}

fn extract_entry(reader: &SdtsReader<'_>, entry: &EntrySpan, output: &Path) -> Result<usize> {
    let mut dirs = GroupDirs::new();
    let mut current_dir: Option<(usize, String)> = None;

    let written = reader.visit_entry(entry, |group, location, data| {
        let group_dir = match &current_dir {
            Some((index, dir)) if *index == group.index => dir.clone(),
            _ => {
                let dir = dirs.allocate(&group.name);
                current_dir = Some((group.index, dir.clone()));
                dir
            }
        };
        let path = output::resource_path(output, &entry.name, &group_dir, location.index, &data);
        output::write_file(&path, &data)?;
        Ok(())
    })?;
    debug!("Entry '{}': wrote {} resources", entry.name, written);
    Ok(written)
}

/// Decrypts one SRK blob into `<output>/<relative_dir>/<stem>.<ext>`.
///
/// A password is required; without one this fails with
/// [`SdtsError::MissingPassword`].
pub fn extract_blob(path: &Path, relative_dir: &Path, config: &ExtractConfig) -> Result<PathBuf> {
    info!("Decrypting blob {}", path.display());
    let password = config.password().ok_or(SdtsError::MissingPassword)?;

    let buf = fs::read(path)?;
    let data = blob::decrypt_whole_file(&buf, password);
    let target = output::blob_path(&config.output, relative_dir, path, &data);
    output::write_file(&target, &data)?;
    Ok(target)
}
