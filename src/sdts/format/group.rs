//! Resource group record parsing.
//!
//! Structure:
//! - 4 bytes: name byte length `n` (includes a 2-byte null terminator)
//! - `n` bytes: UTF-16LE name
//! - 8 bytes: reserved
//! - 4 bytes: resource count `c`
//! - `c` x 4 bytes: resource lengths
//! - resources, stored back to back

use encoding_rs::UTF_16LE;
use log::trace;

use crate::sdts::types::error::{Result, SdtsError};
use crate::sdts::types::models::ResourceGroup;
use crate::sdts::utils::SliceReader;

const RESERVED_SIZE: usize = 8;

/// Parses one resource group record at the reader's position.
///
/// `entry_index` and `index` identify the group within the container. The
/// reader is left at the first resource. The declared resource lengths are
/// checked to fit in the remaining buffer.
pub fn parse(
    reader: &mut SliceReader<'_>,
    entry_index: usize,
    index: usize,
) -> Result<ResourceGroup> {
    let name_len = reader.read_u32()? as usize;
    if name_len % 2 != 0 {
        return Err(SdtsError::CorruptOffsetTable(format!(
            "odd UTF-16 name length {} at {}",
            name_len,
            reader.position() - 4
        )));
    }
    let name = decode_name(reader.take(name_len)?);

    reader.skip(RESERVED_SIZE)?;

    let resource_count = reader.read_u32()? as usize;
    let resource_lengths = reader.read_u32_table(resource_count)?;

    let group = ResourceGroup {
        entry_index,
        index,
        name,
        resource_lengths,
        data_start: reader.position(),
    };

    if group.data_len() > reader.remaining() {
        return Err(SdtsError::CorruptOffsetTable(format!(
            "group '{}' declares {} bytes of resources but only {} remain",
            group.name,
            group.data_len(),
            reader.remaining()
        )));
    }

    trace!(
        "Group '{}': {} resources, {} bytes",
        group.name,
        group.len(),
        group.data_len()
    );
    Ok(group)
}

/// Decodes a UTF-16LE name and drops its 2-byte null terminator.
///
/// A leading byte-order mark is kept as a character, not interpreted.
pub fn decode_name(raw: &[u8]) -> String {
    let text = &raw[..raw.len().saturating_sub(2)];
    let (name, _) = UTF_16LE.decode_without_bom_handling(text);
    name.into_owned()
}
