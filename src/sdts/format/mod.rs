//! File format parsing layer for SDTS containers.
//!
//! # Module Organization
//!
//! - [`header`]: Parses the fixed 24-byte header and the password gate
//! - [`index`]: Reads and validates offset tables, computes entry spans
//! - [`group`]: Parses resource group records inside an entry
//!
//! # Architecture
//!
//! ```text
//! Container layout:
//! ┌──────────────────────┐ 0
//! │  Header (24 bytes)   │ ← header::parse()
//! ├──────────────────────┤ 24
//! │  Top offset table    │ ← index::read_offset_table()
//! ├──────────────────────┤ 168 (preamble end, base of top offsets)
//! │  Entry               │
//! │   count              │ ← base of local offsets
//! │   local offsets      │
//! │   Group              │ ← group::parse()
//! │    name, lengths     │
//! │    resources...      │
//! │   Group ...          │
//! ├──────────────────────┤
//! │  Entry ...           │
//! └──────────────────────┘
//! ```

pub mod group;
pub mod header;
pub mod index;

/// Size of the fixed header, after which the top-level offset table starts.
pub const HEADER_SIZE: usize = 24;

/// Top-level entry offsets are relative to this position.
pub const PREAMBLE_SIZE: usize = 168;
