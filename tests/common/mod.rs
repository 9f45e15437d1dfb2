//! Synthetic SDTS containers for tests.
#![allow(dead_code)]

use sdts_reader::{derive_key, rc4_decrypt, CipherKey, EntryCatalog};

pub const HEADER_SIZE: usize = 24;
pub const PREAMBLE_SIZE: usize = 168;

/// A PNG signature followed by an IHDR and IEND chunk.
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', //
    0, 0, 0, 13, b'I', b'H', b'D', b'R', 0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0, 0x90, 0x77, 0x53,
    0xde, //
    0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xae, 0x42, 0x60, 0x82,
];

pub struct GroupSpec {
    pub name: String,
    pub resources: Vec<Vec<u8>>,
}

pub fn group(name: &str, resources: &[&[u8]]) -> GroupSpec {
    GroupSpec {
        name: name.to_string(),
        resources: resources.iter().map(|r| r.to_vec()).collect(),
    }
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn utf16_name(name: &str) -> Vec<u8> {
    let mut out: Vec<u8> = name.encode_utf16().flat_map(u16::to_le_bytes).collect();
    out.extend_from_slice(&[0, 0]);
    out
}

pub fn encode_group(group: &GroupSpec, key: Option<&CipherKey>) -> Vec<u8> {
    let mut out = Vec::new();
    let name = utf16_name(&group.name);
    push_u32(&mut out, name.len() as u32);
    out.extend_from_slice(&name);
    out.extend_from_slice(&[0xEE; 8]);
    push_u32(&mut out, group.resources.len() as u32);
    for resource in &group.resources {
        push_u32(&mut out, resource.len() as u32);
    }
    for resource in &group.resources {
        match key {
            Some(key) => out.extend_from_slice(&rc4_decrypt(resource, key)),
            None => out.extend_from_slice(resource),
        }
    }
    out
}

/// Encodes an entry: count, `count + 1` offsets relative to the count field,
/// then the group records.
pub fn encode_entry(groups: &[GroupSpec], key: Option<&CipherKey>) -> Vec<u8> {
    let blobs: Vec<Vec<u8>> = groups.iter().map(|g| encode_group(g, key)).collect();
    let mut out = Vec::new();
    push_u32(&mut out, groups.len() as u32);
    let mut offset = 4 + 4 * (groups.len() + 1);
    push_u32(&mut out, offset as u32);
    for blob in &blobs {
        offset += blob.len();
        push_u32(&mut out, offset as u32);
    }
    for blob in &blobs {
        out.extend_from_slice(blob);
    }
    out
}

#[derive(Default)]
pub struct ContainerBuilder {
    entries: Vec<Option<Vec<GroupSpec>>>,
    password: Option<String>,
    padding: usize,
    version: u32,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            version: 1,
            ..Self::default()
        }
    }

    pub fn entry(mut self, groups: Vec<GroupSpec>) -> Self {
        self.entries.push(Some(groups));
        self
    }

    /// Adds a zero-length entry.
    pub fn empty_entry(mut self) -> Self {
        self.entries.push(None);
        self
    }

    pub fn encrypted(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Unused bytes between the preamble and the first entry.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// `Entry1`, `Entry2`, ... one per added entry.
    pub fn catalog(&self) -> EntryCatalog {
        EntryCatalog::new((1..=self.entries.len()).map(|i| format!("Entry{}", i)))
    }

    pub fn build(&self) -> Vec<u8> {
        let key = self.password.as_deref().map(derive_key);
        let blobs: Vec<Vec<u8>> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Some(groups) => encode_entry(groups, key.as_ref()),
                None => Vec::new(),
            })
            .collect();

        let table_end = HEADER_SIZE + 4 * (self.entries.len() + 1);
        let data_start = table_end.max(PREAMBLE_SIZE) + self.padding;

        let mut out = Vec::new();
        out.extend_from_slice(b"SDTS");
        push_u32(&mut out, u32::from(self.password.is_some()));
        push_u32(&mut out, self.version);
        out.extend_from_slice(&[0; 8]);
        push_u32(&mut out, 0);

        let mut offset = data_start - PREAMBLE_SIZE;
        push_u32(&mut out, offset as u32);
        for blob in &blobs {
            offset += blob.len();
            push_u32(&mut out, offset as u32);
        }
        out.resize(data_start, 0);
        for blob in &blobs {
            out.extend_from_slice(blob);
        }
        out
    }
}

/// A bare header followed by a top-level offset table, with no entry data.
pub fn header_with_offsets(encrypted: bool, offsets: &[u32]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"SDTS");
    push_u32(&mut out, u32::from(encrypted));
    push_u32(&mut out, 1);
    out.extend_from_slice(&[0; 8]);
    push_u32(&mut out, 0);
    for &offset in offsets {
        push_u32(&mut out, offset);
    }
    out
}
