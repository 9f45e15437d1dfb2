//! SDTS header parsing.

use log::debug;

use crate::sdts::types::error::{Result, SdtsError};
use crate::sdts::types::models::ContainerHeader;
use crate::sdts::utils::SliceReader;

/// Magic bytes at the start of every container.
pub const SIGNATURE: &[u8; 4] = b"SDTS";

/// Parses the container header and applies the password gate.
///
/// On success the reader is positioned at the top-level offset table.
///
/// # Errors
/// - [`SdtsError::InvalidSignature`] if the first four bytes are not `SDTS`
/// - [`SdtsError::MissingPassword`] if the container is encrypted and
///   `has_password` is false. This is checked right after the flag is read,
///   before the rest of the header.
pub fn parse(reader: &mut SliceReader<'_>, has_password: bool) -> Result<ContainerHeader> {
    match reader.take(SIGNATURE.len()) {
        Ok(signature) if signature == SIGNATURE => {}
        _ => return Err(SdtsError::InvalidSignature),
    }

    let is_encrypted = reader.read_u32()? == 1;
    if is_encrypted && !has_password {
        return Err(SdtsError::MissingPassword);
    }

    let version = reader.read_u32()?;
    reader.skip(8)?;
    let project_offset = reader.read_u32()?;

    debug!(
        "Header parsed: version={}, encrypted={}, project_offset={}",
        version, is_encrypted, project_offset
    );

    Ok(ContainerHeader {
        is_encrypted,
        version,
        project_offset,
    })
}
