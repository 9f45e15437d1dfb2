use log::{debug, info, trace};

use super::codec::crypto::{self, CipherKey};
use super::format::{self, group, header, index};
use super::iter::ResourceIterator;
use super::types::catalog::EntryCatalog;
use super::types::error::Result;
use super::types::models::*;
use super::utils::SliceReader;

/// The main reader for SDTS containers.
///
/// Borrows the whole container buffer for its lifetime. Opening the reader
/// parses the header and the top-level offset table; entries, groups and
/// resources are decoded on demand.
///
/// The reader holds no mutable state, so it can be shared across threads to
/// decode entries in parallel.
#[derive(Debug)]
pub struct SdtsReader<'a> {
    buf: &'a [u8],
    header: ContainerHeader,
    entries: Vec<EntrySpan>,
    /// Present only when the container is encrypted.
    key: Option<CipherKey>,
}

impl<'a> SdtsReader<'a> {
    /// Parses the header and top-level offset table of a container.
    ///
    /// An empty password counts as no password.
    ///
    /// # Errors
    /// - [`SdtsError::InvalidSignature`](crate::SdtsError::InvalidSignature) if the buffer is not an SDTS container
    /// - [`SdtsError::MissingPassword`](crate::SdtsError::MissingPassword) if it is encrypted and no password was given
    /// - [`SdtsError::CorruptOffsetTable`](crate::SdtsError::CorruptOffsetTable) if the top-level table is truncated
    ///   or non-monotonic
    pub fn open(buf: &'a [u8], catalog: &EntryCatalog, password: Option<&str>) -> Result<Self> {
        let password = password.filter(|p| !p.is_empty());
        let mut reader = SliceReader::new(buf);

        let header = header::parse(&mut reader, password.is_some())?;
        let offsets = index::read_offset_table(&mut reader, catalog.len() + 1)?;
        let entries: Vec<EntrySpan> = index::entry_spans(catalog, &offsets, format::PREAMBLE_SIZE)?
            .into_iter()
            .filter(|entry| {
                if entry.is_empty() {
                    trace!("Skipping empty entry '{}'", entry.name);
                }
                !entry.is_empty()
            })
            .collect();

        let key = if header.is_encrypted {
            password.map(crypto::derive_key)
        } else {
            None
        };

        info!(
            "SDTS container opened: version {}, {} non-empty entries of {}, encrypted={}",
            header.version,
            entries.len(),
            catalog.len(),
            header.is_encrypted
        );

        Ok(Self {
            buf,
            header,
            entries,
            key,
        })
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    pub fn is_encrypted(&self) -> bool {
        self.header.is_encrypted
    }

    /// Non-empty entries in catalog order.
    pub fn entries(&self) -> &[EntrySpan] {
        &self.entries
    }

    /// Decodes the resource group records of one entry.
    ///
    /// The entry's local offsets are relative to the position of its
    /// resource group count field.
    pub fn read_groups(&self, entry: &EntrySpan) -> Result<Vec<ResourceGroup>> {
        let mut reader = SliceReader::at(self.buf, entry.start)?;

        let base = reader.position();
        let group_count = reader.read_u32()? as usize;
        let offsets = index::read_offset_table(&mut reader, group_count + 1)?;
        debug!(
            "Entry '{}' at {}: {} resource groups",
            entry.name, entry.start, group_count
        );

        index::spans(&offsets, base)
            .into_iter()
            .enumerate()
            .map(|(group_index, (start, _))| {
                reader.seek(start)?;
                group::parse(&mut reader, entry.index, group_index)
            })
            .collect()
    }

    /// Reads the resource at `location`, decrypting it if the container is
    /// encrypted. Each call uses a fresh keystream.
    pub fn read_resource(&self, location: &ResourceLocation) -> Result<Vec<u8>> {
        let mut data = SliceReader::at(self.buf, location.offset)?
            .take(location.length)?
            .to_vec();
        if let Some(key) = &self.key {
            crypto::decrypt_in_place(&mut data, key);
        }
        trace!(
            "Read resource {}/{}/{} ({} bytes at {})",
            location.entry_index,
            location.group_index,
            location.index,
            location.length,
            location.offset
        );
        Ok(data)
    }

    /// Decodes every resource of one entry in storage order and hands each
    /// one to `visit`. Stops at the first error from decoding or from
    /// `visit`. Returns the number of resources visited.
    pub fn visit_entry<F>(&self, entry: &EntrySpan, mut visit: F) -> Result<usize>
    where
        F: FnMut(&ResourceGroup, &ResourceLocation, Vec<u8>) -> Result<()>,
    {
        let mut visited = 0;
        for group in self.read_groups(entry)? {
            for location in group.locations() {
                let data = self.read_resource(&location)?;
                visit(&group, &location, data)?;
                visited += 1;
            }
        }
        Ok(visited)
    }

    /// Decodes every resource of one entry, in storage order.
    pub fn decode_entry(&self, entry: &EntrySpan) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        self.visit_entry(entry, |group, location, data| {
            resources.push(Resource {
                entry: entry.name.clone(),
                group: group.name.clone(),
                index: location.index,
                data,
            });
            Ok(())
        })?;
        Ok(resources)
    }

    /// Returns an iterator over all resources in the container.
    ///
    /// Groups are decoded one entry at a time and resources one at a time,
    /// so memory use is bounded by the largest single resource.
    pub fn iter_resources(&self) -> ResourceIterator<'_, 'a> {
        ResourceIterator::new(self)
    }
}
