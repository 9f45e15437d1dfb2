//! Cryptographic operations for SDTS resources and SRK blobs.
//!
//! Both formats use the same scheme:
//! - Key = MD5(password encoded as UTF-16LE, no BOM, no terminator)
//! - Cipher = RC4 keyed with that 16-byte digest
//!
//! RC4 is an involution, so "decrypt" and "encrypt" are the same operation.

use log::trace;
use md5::{Digest, Md5};
use rc4::consts::U16;
use rc4::{KeyInit, Rc4, StreamCipher};

/// A 16-byte RC4 key derived from a password.
pub type CipherKey = [u8; 16];

/// Derives the RC4 key for a password.
///
/// # Algorithm
/// 1. Encode the password as UTF-16LE code units
/// 2. Hash the resulting bytes with MD5
pub fn derive_key(password: &str) -> CipherKey {
    trace!("Deriving RC4 key from a {}-character password", password.chars().count());

    let mut hasher = Md5::new();
    for unit in password.encode_utf16() {
        hasher.update(unit.to_le_bytes());
    }
    hasher.finalize().into()
}

/// Decrypts `data` in-place with a fresh RC4 keystream.
///
/// The keystream state is never shared between calls, so every resource is
/// decrypted independently of its neighbours.
pub fn decrypt_in_place(data: &mut [u8], key: &CipherKey) {
    trace!("Decrypting {} bytes with RC4", data.len());

    let mut cipher = Rc4::<U16>::new(key.into());
    cipher.apply_keystream(data);
}

/// Decrypts a copy of `data` with a fresh RC4 keystream.
pub fn rc4_decrypt(data: &[u8], key: &CipherKey) -> Vec<u8> {
    let mut out = data.to_vec();
    decrypt_in_place(&mut out, key);
    out
}

/// Derives the key for `password` and decrypts `data` with it.
pub fn decrypt_with_password(data: &[u8], password: &str) -> Vec<u8> {
    rc4_decrypt(data, &derive_key(password))
}
