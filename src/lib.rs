//! # sdts-reader
//!
//! A reader for SDTS asset containers (`data.dts`) and SRK encrypted blobs
//! (`*.srk`) as produced by a game-engine toolchain.
//!
//! - [`sdts`]: the container decoder, RC4 decryption and extension sniffing
//! - [`extract`]: walks a game directory and writes every resource to disk
//!
//! ```no_run
//! use sdts_reader::{EntryCatalog, SdtsReader};
//!
//! let buf = std::fs::read("data.dts").unwrap();
//! let reader = SdtsReader::open(&buf, &EntryCatalog::default(), Some("key")).unwrap();
//! for entry in reader.entries() {
//!     for group in reader.read_groups(entry).unwrap() {
//!         println!("{}/{}: {} resources", entry.name, group.name, group.len());
//!     }
//! }
//! ```
pub mod extract;
pub mod sdts;

// Re-export the main types for convenience
pub use extract::{ErrorPolicy, ExtractConfig, ExtractError, ExtractSummary};
pub use sdts::{
    blob::decrypt_whole_file,
    codec::crypto::{derive_key, rc4_decrypt, CipherKey},
    codec::sniff::{sniff_extension, UNKNOWN_EXTENSION},
    types::models::{ContainerHeader, EntrySpan, Resource, ResourceGroup, ResourceLocation},
    EntryCatalog, Result, SdtsError, SdtsReader,
};
