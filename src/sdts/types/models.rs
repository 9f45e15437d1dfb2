//! Core data structures for SDTS container components.
//!
//! Everything except [`Resource`] is a view (offset + length) into the
//! borrowed container buffer. A [`Resource`] owns its decoded bytes.

/// Parsed fixed header of an SDTS container.
///
/// Layout (little-endian):
/// - bytes 0-3: `SDTS`
/// - bytes 4-7: encryption flag (`1` = encrypted, anything else = plain)
/// - bytes 8-11: format version
/// - bytes 12-19: reserved
/// - bytes 20-23: project offset, relative to the preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub is_encrypted: bool,
    pub version: u32,
    /// Raw project offset field. Not used by resource decoding.
    pub project_offset: u32,
}

impl ContainerHeader {
    /// Absolute position of the project section in the container.
    pub fn project_position(&self) -> u64 {
        self.project_offset as u64 + crate::sdts::format::PREAMBLE_SIZE as u64
    }
}

/// A named top-level section located through the top-level offset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpan {
    /// Index of the entry in the catalog.
    pub index: usize,
    pub name: String,
    /// Absolute position of the entry's resource group count field.
    pub start: usize,
    pub length: usize,
}

impl EntrySpan {
    /// Zero-length entries carry no resource groups and are never visited.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// A named collection of resources inside an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    /// Catalog index of the entry holding this group.
    pub entry_index: usize,
    /// Position of the group within its entry.
    pub index: usize,
    pub name: String,
    /// Declared byte length of every resource, in storage order.
    pub resource_lengths: Vec<u32>,
    /// Absolute position of the first resource. Resources follow each other
    /// without padding.
    pub data_start: usize,
}

impl ResourceGroup {
    /// Number of resources in this group.
    pub fn len(&self) -> usize {
        self.resource_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_lengths.is_empty()
    }

    /// Locations of every resource in this group, in storage order.
    ///
    /// Offsets are accumulated in a single pass over the length table.
    pub fn locations(&self) -> impl Iterator<Item = ResourceLocation> + '_ {
        self.resource_lengths
            .iter()
            .enumerate()
            .scan(self.data_start, |offset, (index, &length)| {
                let location = ResourceLocation {
                    entry_index: self.entry_index,
                    group_index: self.index,
                    index,
                    offset: *offset,
                    length: length as usize,
                };
                *offset += location.length;
                Some(location)
            })
    }

    /// Total number of bytes covered by this group's resources.
    pub fn data_len(&self) -> usize {
        self.resource_lengths.iter().map(|&len| len as usize).sum()
    }
}

/// Where one resource lives in the container buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLocation {
    pub entry_index: usize,
    pub group_index: usize,
    /// Position of the resource within its group.
    pub index: usize,
    /// Absolute position of the (possibly encrypted) bytes.
    pub offset: usize,
    pub length: usize,
}

/// A fully decoded resource, ready to be handed to the extraction driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub entry: String,
    pub group: String,
    /// Position of the resource within its group.
    pub index: usize,
    pub data: Vec<u8>,
}
