//! SRK blob decryption.
//!
//! An SRK file has no structure: the whole file is RC4 ciphertext under the
//! password-derived key. Decryption cannot fail and the plaintext is never
//! validated, so a wrong password still yields bytes (usually unrecognisable).

use log::debug;

use super::codec::crypto;

/// Decrypts a whole SRK file.
pub fn decrypt_whole_file(buf: &[u8], password: &str) -> Vec<u8> {
    debug!("Decrypting {} byte SRK blob", buf.len());
    crypto::decrypt_with_password(buf, password)
}
