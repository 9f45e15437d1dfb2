//! Codec layer for decryption and content sniffing.
//!
//! # Submodules
//!
//! - [`crypto`][]: Key derivation (MD5 over UTF-16LE) and the RC4 stream cipher
//! - [`sniff`][]: Magic-byte based extension guessing for decoded resources

pub mod crypto;
pub mod sniff;
