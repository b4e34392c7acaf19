//! Error types for license generation and verification.

use thiserror::Error;

/// License-specific errors.
///
/// Verification collapses every variant to `false` at the boolean boundary;
/// the variants only matter to callers of [`LicenseVerifier::check`].
///
/// [`LicenseVerifier::check`]: crate::LicenseVerifier::check
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The candidate string does not follow the license grammar.
    #[error("malformed license key: {0}")]
    Malformed(String),

    /// Well-formed key whose signature does not match the identity.
    #[error("license key signature does not match")]
    SignatureMismatch,

    /// Secret has the wrong number of bytes.
    #[error("invalid secret length: expected {expected}, got {actual}")]
    InvalidSecretLength { expected: usize, actual: usize },

    /// Secret text is not valid hex.
    #[error("invalid secret encoding: {0}")]
    InvalidSecretEncoding(String),

    /// Issue date is not an 8-digit `YYYYMMDD` value.
    #[error("invalid issue date: {0}")]
    InvalidDate(String),

    /// Version tag cannot be embedded in a key.
    #[error("invalid version tag: {0:?}")]
    InvalidVersion(String),
}

impl LicenseError {
    /// Returns true for errors caused by the shape of the candidate string
    /// rather than by a signature mismatch.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::InvalidDate(_))
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
