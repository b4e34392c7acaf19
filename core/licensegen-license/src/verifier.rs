//! License key verification.
//!
//! Verification parses the candidate, rebuilds the payload from the parsed
//! version and date plus the supplied identity, recomputes the signature and
//! compares it to the candidate's in constant time. The expected signature is
//! truncated to the candidate's length, so any prefix of the canonical
//! signature between 1 and [`MAX_SIGNATURE_LEN`] characters verifies.
//!
//! [`MAX_SIGNATURE_LEN`]: crate::MAX_SIGNATURE_LEN

use crate::error::{LicenseError, LicenseResult};
use crate::key::LicenseKey;
use crate::payload::build_payload;
use crate::secret::Secret;
use crate::signature::canonical_signature;
use licensegen_crypto::constant_time_eq;
use tracing::debug;

/// Checks license keys against identities.
#[derive(Debug, Clone)]
pub struct LicenseVerifier {
    secret: Secret,
}

impl LicenseVerifier {
    /// Creates a verifier holding `secret`.
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    /// Returns true if `candidate` is a valid key for the identity.
    ///
    /// Never panics; malformed input and signature mismatches both yield
    /// `false`.
    #[must_use]
    pub fn verify(&self, candidate: &str, first: &str, last: &str, email: &str) -> bool {
        match self.check(candidate, first, last, email) {
            Ok(_) => true,
            Err(e) => {
                debug!(reason = %e, "license key rejected");
                false
            }
        }
    }

    /// Verifies `candidate` and returns the parsed key on success.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error if the candidate does not parse, or
    /// [`LicenseError::SignatureMismatch`] if it does not belong to the
    /// identity.
    pub fn check(
        &self,
        candidate: &str,
        first: &str,
        last: &str,
        email: &str,
    ) -> LicenseResult<LicenseKey> {
        let key = LicenseKey::parse(candidate)?;

        let payload = build_payload(first, last, email, key.version(), key.date().as_str());
        let expected = canonical_signature(&self.secret, &payload);

        let provided = key.signature().as_bytes();
        let expected_prefix = &expected.as_bytes()[..provided.len().min(expected.len())];

        if constant_time_eq(provided, expected_prefix) {
            Ok(key)
        } else {
            Err(LicenseError::SignatureMismatch)
        }
    }
}

/// Returns true if `candidate` is a valid key for the identity under `secret`.
#[must_use]
pub fn verify(secret: &Secret, candidate: &str, first: &str, last: &str, email: &str) -> bool {
    LicenseVerifier::new(secret.clone()).verify(candidate, first, last, email)
}
