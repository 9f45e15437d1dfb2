//! Extension guessing for decoded resources.
//!
//! Sniffing only makes sense on plaintext. Callers run it strictly after
//! decryption.

use infer::Infer;
use std::sync::OnceLock;

/// Extension used when the content type cannot be recognised.
pub const UNKNOWN_EXTENSION: &str = "unknown";

static MATCHERS: OnceLock<Infer> = OnceLock::new();

fn matchers() -> &'static Infer {
    MATCHERS.get_or_init(Infer::new)
}

/// Returns a file extension (without the dot) for `data`.
///
/// Never fails: empty or unrecognised input yields [`UNKNOWN_EXTENSION`].
pub fn sniff_extension(data: &[u8]) -> &'static str {
    if data.is_empty() {
        return UNKNOWN_EXTENSION;
    }
    matchers()
        .get(data)
        .map(|kind| kind.extension())
        .unwrap_or(UNKNOWN_EXTENSION)
}

/// Builds the output file name for a resource: `NNNN.ext`.
pub fn resource_file_name(index: usize, data: &[u8]) -> String {
    format!("{:04}.{}", index, sniff_extension(data))
}
