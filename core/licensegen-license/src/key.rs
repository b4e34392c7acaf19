//! License string parsing and formatting.
//!
//! Keys use the format `VERSION-DATE-GROUP[-GROUP...]`:
//!
//! ```text
//! license := version "-" date "-" group ("-" group)*
//! version := one-or-more non-hyphen characters
//! date    := 8 digits (UTC YYYYMMDD)
//! group   := 1 to 4 characters from {A-Z, 2-7}
//! ```
//!
//! The signature is the concatenation of all groups and is at most
//! [`MAX_SIGNATURE_LEN`] characters long. Parsing is lenient about
//! presentation: whitespace anywhere is dropped and letters are upper-cased
//! before the grammar is applied.

use crate::date::IssueDate;
use crate::error::{LicenseError, LicenseResult};
use crate::normalize::is_space;
use licensegen_crypto::is_base32_symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current license format revision.
pub const LICENSE_VERSION: &str = "V1";

/// Longest signature a verifier accepts.
pub const MAX_SIGNATURE_LEN: usize = 18;

/// Signature length the generator emits.
pub const DISPLAY_SIGNATURE_LEN: usize = 12;

/// Characters per signature group.
pub const GROUP_LEN: usize = 4;

/// Separator between version, date and signature groups.
pub const SEPARATOR: char = '-';

/// A structurally valid license key.
///
/// Holding a `LicenseKey` says nothing about its authenticity; use
/// [`LicenseVerifier`](crate::LicenseVerifier) for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenseKey {
    version: String,
    date: IssueDate,
    signature: String,
}

impl LicenseKey {
    pub(crate) fn new(version: String, date: IssueDate, signature: String) -> Self {
        Self {
            version,
            date,
            signature,
        }
    }

    /// Parses a candidate license string.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Malformed`] or [`LicenseError::InvalidDate`]
    /// if the candidate does not follow the license grammar.
    pub fn parse(candidate: &str) -> LicenseResult<Self> {
        if candidate.is_empty() {
            return Err(malformed("empty license key"));
        }

        let cleaned: String = candidate
            .chars()
            .filter(|&c| !is_space(c))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let parts: Vec<&str> = cleaned.split(SEPARATOR).collect();
        if parts.len() < 3 {
            return Err(malformed(
                "expected version, date and at least one signature group",
            ));
        }

        let version = parts[0];
        if version.is_empty() {
            return Err(malformed("empty version"));
        }
        let date = IssueDate::parse(parts[1])?;

        let mut signature = String::with_capacity(MAX_SIGNATURE_LEN);
        for group in &parts[2..] {
            if group.is_empty() {
                return Err(malformed("empty signature group"));
            }
            signature.push_str(group);
        }

        if signature.len() > MAX_SIGNATURE_LEN {
            return Err(malformed(format!(
                "signature has {} characters, at most {MAX_SIGNATURE_LEN} allowed",
                signature.len()
            )));
        }
        if !signature.bytes().all(is_base32_symbol) {
            return Err(malformed("signature contains characters outside A-Z and 2-7"));
        }

        Ok(Self::new(version.to_owned(), date, signature))
    }

    /// Returns the version tag.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the issue date.
    #[must_use]
    pub fn date(&self) -> &IssueDate {
        &self.date
    }

    /// Returns the signature with group separators removed.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Iterates over the signature in [`GROUP_LEN`]-character groups.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        // The signature is ASCII, so byte chunks fall on char boundaries.
        self.signature
            .as_bytes()
            .chunks(GROUP_LEN)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok())
    }
}

fn malformed(reason: impl Into<String>) -> LicenseError {
    LicenseError::Malformed(reason.into())
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.version, self.date)?;
        for group in self.groups() {
            write!(f, "{SEPARATOR}{group}")?;
        }
        Ok(())
    }
}

impl FromStr for LicenseKey {
    type Err = LicenseError;

    fn from_str(s: &str) -> LicenseResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LicenseKey {
    type Error = LicenseError;

    fn try_from(value: String) -> LicenseResult<Self> {
        Self::parse(&value)
    }
}

impl From<LicenseKey> for String {
    fn from(key: LicenseKey) -> Self {
        key.to_string()
    }
}
