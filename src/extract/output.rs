//! Output layout:
//! - container resources: `<output>/<entry>/<group>/<NNNN>.<ext>`
//! - SRK blobs: `<output>/<relative dir>/<stem>.<ext>`

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{trace, warn};
use sanitize_filename::{sanitize_with_options, Options};

use crate::sdts::codec::sniff;

/// Directory name used for groups whose name is empty or only dots.
const UNNAMED_GROUP: &str = "_unnamed";

/// Replacement for characters that cannot appear in a path component.
const REPLACEMENT: &str = "_";

/// Makes a group name safe to use as a single path component.
///
/// Group names come from the container and may contain separators or `..`.
/// Only what the host filesystem rejects is replaced: on Unix that is `/`
/// and NUL, on Windows the full reserved set.
pub fn group_dir_name(group: &str) -> String {
    let name = if cfg!(windows) {
        sanitize_with_options(
            group,
            Options {
                windows: true,
                truncate: true,
                replacement: REPLACEMENT,
            },
        )
    } else {
        group.replace(|c: char| c == '/' || c == '\0', REPLACEMENT)
    };
    if name.is_empty() {
        UNNAMED_GROUP.to_string()
    } else if name.chars().all(|c| c == '.') {
        name.replace('.', REPLACEMENT)
    } else {
        name
    }
}

/// Assigns a distinct directory name to every group of one entry.
///
/// Two groups whose names sanitise to the same component would otherwise
/// overwrite each other's files. Later groups get a `~N` suffix.
#[derive(Debug, Default)]
pub struct GroupDirs {
    used: HashSet<String>,
}

impl GroupDirs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the directory name for `group`. Call once per group.
    pub fn allocate(&mut self, group: &str) -> String {
        let base = group_dir_name(group);
        let mut name = base.clone();
        let mut suffix = 1;
        while !self.used.insert(name.clone()) {
            name = format!("{}~{}", base, suffix);
            suffix += 1;
        }
        if name != base {
            warn!("Group '{}' collides with an earlier group, using '{}'", group, name);
        }
        name
    }
}

/// Path of a container resource, extension sniffed from `data`.
pub fn resource_path(output: &Path, entry: &str, group_dir: &str, index: usize, data: &[u8]) -> PathBuf {
    output
        .join(entry)
        .join(group_dir)
        .join(sniff::resource_file_name(index, data))
}

/// Path of a decrypted SRK blob, extension sniffed from `data`.
pub fn blob_path(output: &Path, relative_dir: &Path, source: &Path, data: &[u8]) -> PathBuf {
    let file_name = source.file_name().map(PathBuf::from).unwrap_or_default();
    output
        .join(relative_dir)
        .join(file_name)
        .with_extension(sniff::sniff_extension(data))
}

/// Writes `data` to `path`, creating parent directories as needed.
///
/// Directory creation tolerates concurrent creation by other workers.
pub fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    trace!("Writing {} bytes to {}", data.len(), path.display());
    fs::write(path, data)
}
