//! Offset table reading and entry span computation.
//!
//! Offset tables hold `N + 1` little-endian u32 values for `N` children.
//! Child `i` starts at `offsets[i] + base` and is `offsets[i + 1] - offsets[i]`
//! bytes long, so the table must be non-decreasing.
//!
//! The base differs by level:
//! - top level: the fixed 168-byte preamble
//! - inside an entry: the position of the entry's count field (not the
//!   entry's declared start, although the two currently coincide)

use log::trace;

use crate::sdts::types::catalog::EntryCatalog;
use crate::sdts::types::error::{Result, SdtsError};
use crate::sdts::types::models::EntrySpan;
use crate::sdts::utils::SliceReader;

/// Reads `count` offsets and checks they never decrease.
pub fn read_offset_table(reader: &mut SliceReader<'_>, count: usize) -> Result<Vec<u32>> {
    let offsets = reader.read_u32_table(count)?;
    validate_monotonic(&offsets)?;
    trace!("Read offset table with {} slots", offsets.len());
    Ok(offsets)
}

/// Fails with [`SdtsError::CorruptOffsetTable`] at the first decreasing pair.
pub fn validate_monotonic(offsets: &[u32]) -> Result<()> {
    match offsets.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(i) => Err(SdtsError::CorruptOffsetTable(format!(
            "offset {} ({}) is greater than offset {} ({})",
            i,
            offsets[i],
            i + 1,
            offsets[i + 1]
        ))),
        None => Ok(()),
    }
}

/// Computes `(start, length)` for every slot of a validated table.
pub fn spans(offsets: &[u32], base: usize) -> Vec<(usize, usize)> {
    offsets
        .windows(2)
        .map(|pair| (pair[0] as usize + base, (pair[1] - pair[0]) as usize))
        .collect()
}

/// Pairs catalog names with the spans of a validated top-level table.
///
/// Zero-length entries are kept here; callers filter them with
/// [`EntrySpan::is_empty`].
pub fn entry_spans(catalog: &EntryCatalog, offsets: &[u32], base: usize) -> Result<Vec<EntrySpan>> {
    if offsets.len() != catalog.len() + 1 {
        return Err(SdtsError::CorruptOffsetTable(format!(
            "expected {} top-level offsets for {} entries, found {}",
            catalog.len() + 1,
            catalog.len(),
            offsets.len()
        )));
    }
    Ok(catalog
        .iter()
        .zip(spans(offsets, base))
        .enumerate()
        .map(|(index, (name, (start, length)))| EntrySpan {
            index,
            name: name.to_string(),
            start,
            length,
        })
        .collect())
}
