//! Cryptographic primitives for license keys.
//!
//! This crate provides:
//! - SHA-256 with an incremental `new → update → finalize` lifecycle
//! - HMAC-SHA256 built on that hash
//! - Unpadded RFC 4648 Base32 encoding
//! - Constant-time byte comparison
//!
//! Every function here is pure and total: any byte sequence, including an
//! empty one, is valid input. Each computation owns its own context, so the
//! primitives can be used from any number of threads without coordination.

mod base32;
mod compare;
mod mac;
mod sha256;

pub use base32::{
    ALPHABET as BASE32_ALPHABET, encode as base32_encode, encoded_len as base32_encoded_len,
    is_symbol as is_base32_symbol,
};
pub use compare::constant_time_eq;
pub use mac::{HmacSha256, TAG_SIZE, hmac_sha256};
pub use sha256::{BLOCK_SIZE, DIGEST_SIZE, Sha256, sha256};
