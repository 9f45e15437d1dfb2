//! Sequential access to every resource of a container.
//!
//! # Example
//! ```no_run
//! # use sdts_reader::{EntryCatalog, SdtsReader};
//! # let buf = std::fs::read("data.dts").unwrap();
//! let reader = SdtsReader::open(&buf, &EntryCatalog::default(), Some("key")).unwrap();
//! for result in reader.iter_resources() {
//!     let resource = result.unwrap();
//!     println!("{}/{}/{:04}: {} bytes", resource.entry, resource.group, resource.index, resource.data.len());
//! }
//! ```

use std::vec::IntoIter;

use super::reader::SdtsReader;
use super::types::error::Result;
use super::types::models::{Resource, ResourceGroup, ResourceLocation};

/// Iterator over `(entry, group, index, bytes)` resources in file order.
///
/// Created by [`SdtsReader::iter_resources()`]. The iterator stops after the
/// first error, since a corrupt table makes everything after it unreliable.
pub struct ResourceIterator<'r, 'a> {
    reader: &'r SdtsReader<'a>,
    entry_idx: usize,
    entry_name: String,
    groups: IntoIter<ResourceGroup>,
    /// Name and remaining resource locations of the group being read.
    current: Option<(String, IntoIter<ResourceLocation>)>,
    failed: bool,
}

impl<'r, 'a> ResourceIterator<'r, 'a> {
    pub(super) fn new(reader: &'r SdtsReader<'a>) -> Self {
        Self {
            reader,
            entry_idx: 0,
            entry_name: String::new(),
            groups: Vec::new().into_iter(),
            current: None,
            failed: false,
        }
    }
}

impl Iterator for ResourceIterator<'_, '_> {
    type Item = Result<Resource>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            // Next resource of the current group
            if let Some((group_name, locations)) = &mut self.current {
                if let Some(location) = locations.next() {
                    let result = self.reader.read_resource(&location).map(|data| Resource {
                        entry: self.entry_name.clone(),
                        group: group_name.clone(),
                        index: location.index,
                        data,
                    });
                    self.failed = result.is_err();
                    return Some(result);
                }
                self.current = None;
            }

            // Next group of the current entry
            if let Some(group) = self.groups.next() {
                let locations: Vec<ResourceLocation> = group.locations().collect();
                self.current = Some((group.name, locations.into_iter()));
                continue;
            }

            // Next entry
            let entry = self.reader.entries().get(self.entry_idx)?;
            self.entry_idx += 1;
            match self.reader.read_groups(entry) {
                Ok(groups) => {
                    self.entry_name = entry.name.clone();
                    self.groups = groups.into_iter();
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
