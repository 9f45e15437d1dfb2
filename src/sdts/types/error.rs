//! Custom error types for the sdts-reader crate.

use thiserror::Error;

/// The primary error type for decoding a single SDTS container or SRK blob.
///
/// Every variant is fatal for the file being decoded. Whether the caller
/// continues with other files is decided by the extraction driver.
#[derive(Debug, Error)]
pub enum SdtsError {
    /// The container does not start with the `SDTS` literal.
    #[error("Invalid signature: container does not start with \"SDTS\"")]
    InvalidSignature,

    /// The container is flagged as encrypted, but no password was supplied.
    #[error("Container is encrypted but no password was provided.")]
    MissingPassword,

    /// An offset table is non-monotonic, a length field is malformed, or a
    /// read ran past the end of the buffer.
    #[error("Corrupt offset table: {0}")]
    CorruptOffsetTable(String),

    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `SdtsError` type.
pub type Result<T> = std::result::Result<T, SdtsError>;
