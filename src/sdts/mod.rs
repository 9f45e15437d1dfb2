//! SDTS container and SRK blob decoding.
//!
//! The module is layered bottom-up:
//! - [`types`]: errors, data model and the entry catalog
//! - [`codec`]: key derivation, RC4 and extension sniffing
//! - [`format`]: header, offset table and resource group parsing
//! - [`reader`] and [`iter`]: the container reader over a borrowed buffer
//! - [`blob`]: whole-file SRK decryption

pub mod blob;
pub mod codec;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
pub mod utils;

pub use reader::SdtsReader;
pub use types::catalog::EntryCatalog;
pub use types::error::{Result, SdtsError};
