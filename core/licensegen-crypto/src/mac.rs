//! HMAC-SHA256 (RFC 2104) over [`Sha256`].

use crate::sha256::{BLOCK_SIZE, DIGEST_SIZE, Sha256, sha256};
use zeroize::Zeroize;

/// Size of an HMAC-SHA256 tag in bytes.
pub const TAG_SIZE: usize = DIGEST_SIZE;

const INNER_PAD: u8 = 0x36;
const OUTER_PAD: u8 = 0x5c;

/// An in-progress HMAC-SHA256 computation.
///
/// Holds two hash contexts: the inner one has already absorbed
/// `key ^ ipad` and receives the message; the outer one has absorbed
/// `key ^ opad` and receives the inner digest at [`finalize`](Self::finalize).
#[derive(Clone, Debug)]
pub struct HmacSha256 {
    inner: Sha256,
    outer: Sha256,
}

impl HmacSha256 {
    /// Creates a MAC context keyed with `key`.
    ///
    /// Keys longer than one block are replaced by their digest; shorter keys
    /// are zero-padded to the block size.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mut key_block = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            let mut hashed = sha256(key);
            key_block[..DIGEST_SIZE].copy_from_slice(&hashed);
            hashed.zeroize();
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut pad = [0u8; BLOCK_SIZE];

        for (p, k) in pad.iter_mut().zip(key_block.iter()) {
            *p = k ^ INNER_PAD;
        }
        let mut inner = Sha256::new();
        inner.update(&pad);

        for (p, k) in pad.iter_mut().zip(key_block.iter()) {
            *p = k ^ OUTER_PAD;
        }
        let mut outer = Sha256::new();
        outer.update(&pad);

        pad.zeroize();
        key_block.zeroize();

        Self { inner, outer }
    }

    /// Absorbs more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Returns the tag, consuming the context.
    #[must_use]
    pub fn finalize(self) -> [u8; TAG_SIZE] {
        let mut inner_digest = self.inner.finalize();
        let mut outer = self.outer;
        outer.update(&inner_digest);
        inner_digest.zeroize();
        outer.finalize()
    }
}

/// Computes `HMAC-SHA256(key, message)` in one call.
#[must_use]
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; TAG_SIZE] {
    let mut mac = HmacSha256::new(key);
    mac.update(message);
    mac.finalize()
}
