//! License key generation.

use crate::date::IssueDate;
use crate::error::{LicenseError, LicenseResult};
use crate::key::{DISPLAY_SIGNATURE_LEN, LICENSE_VERSION, LicenseKey, SEPARATOR};
use crate::payload::{FIELD_SEPARATOR, Identity, build_payload};
use crate::secret::Secret;
use crate::signature::canonical_signature;
use tracing::trace;

/// Issues license keys bound to an identity and a date.
///
/// Generation is total: any text, including fields that normalize to the
/// empty string, produces a well-formed key.
#[derive(Debug, Clone)]
pub struct LicenseGenerator {
    secret: Secret,
    version: String,
}

impl LicenseGenerator {
    /// Creates a generator that emits [`LICENSE_VERSION`] keys.
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            version: LICENSE_VERSION.to_owned(),
        }
    }

    /// Overrides the version tag embedded in generated keys.
    ///
    /// # Errors
    ///
    /// The tag must be non-empty and survive the verifier's cleanup
    /// unchanged: no hyphens, no payload separators, no whitespace and no
    /// lower-case ASCII letters.
    pub fn with_version(mut self, version: impl Into<String>) -> LicenseResult<Self> {
        let version = version.into();
        let usable = !version.is_empty()
            && !version.chars().any(|c| {
                c == SEPARATOR
                    || c == FIELD_SEPARATOR
                    || c.is_whitespace()
                    || c.is_ascii_lowercase()
            });
        if !usable {
            return Err(LicenseError::InvalidVersion(version));
        }
        self.version = version;
        Ok(self)
    }

    /// Returns the version tag this generator embeds.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Generates a license string dated today (UTC).
    #[must_use]
    pub fn generate(&self, first: &str, last: &str, email: &str) -> String {
        self.generate_on(first, last, email, &IssueDate::today())
    }

    /// Generates a license string for a fixed issue date.
    #[must_use]
    pub fn generate_on(&self, first: &str, last: &str, email: &str, date: &IssueDate) -> String {
        self.issue(&Identity::new(first, last, email), date).to_string()
    }

    /// Issues a structured license key for `identity` on `date`.
    #[must_use]
    pub fn issue(&self, identity: &Identity, date: &IssueDate) -> LicenseKey {
        let payload = build_payload(
            &identity.first,
            &identity.last,
            &identity.email,
            &self.version,
            date.as_str(),
        );
        let mut signature = canonical_signature(&self.secret, &payload);
        signature.truncate(DISPLAY_SIGNATURE_LEN);

        trace!(version = %self.version, date = %date, "issued license key");
        LicenseKey::new(self.version.clone(), date.clone(), signature)
    }
}

/// Generates a license string dated today with the current version.
#[must_use]
pub fn generate(secret: &Secret, first: &str, last: &str, email: &str) -> String {
    LicenseGenerator::new(secret.clone()).generate(first, last, email)
}
