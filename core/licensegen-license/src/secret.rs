//! The shared signing secret.

use crate::error::{LicenseError, LicenseResult};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the signing secret in bytes.
pub const SECRET_LEN: usize = 32;

/// The MAC key shared by generation and verification.
///
/// Both sides must hold the identical secret or every verification fails.
/// The bytes are wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    bytes: [u8; SECRET_LEN],
}

impl Secret {
    /// Creates a secret from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self { bytes }
    }

    /// Creates a secret from a slice that must be exactly [`SECRET_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> LicenseResult<Self> {
        if bytes.len() != SECRET_LEN {
            return Err(LicenseError::InvalidSecretLength {
                expected: SECRET_LEN,
                actual: bytes.len(),
            });
        }
        let mut owned = [0u8; SECRET_LEN];
        owned.copy_from_slice(bytes);
        Ok(Self { bytes: owned })
    }

    /// Parses a secret from hex text (surrounding whitespace ignored).
    pub fn from_hex(text: &str) -> LicenseResult<Self> {
        let mut decoded = hex::decode(text.trim())
            .map_err(|e| LicenseError::InvalidSecretEncoding(e.to_string()))?;
        let secret = Self::from_slice(&decoded);
        decoded.zeroize();
        secret
    }

    /// Returns the secret bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
