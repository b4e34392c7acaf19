//! Canonical payload construction.
//!
//! The payload is the message that gets signed:
//! `normalize(first)|normalize(last)|normalize(email)|version|date`.
//! Version and date are machine-produced and passed through verbatim.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Separator between payload fields.
pub const FIELD_SEPARATOR: char = '|';

/// The identity a license is bound to.
///
/// Fields are free text and are not validated for shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// First name.
    pub first: String,
    /// Last name.
    pub last: String,
    /// Email address.
    pub email: String,
}

impl Identity {
    /// Creates an identity from its three fields.
    #[must_use]
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            email: email.into(),
        }
    }

    /// Returns the identity with every field normalized.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            first: normalize(&self.first),
            last: normalize(&self.last),
            email: normalize(&self.email),
        }
    }

    /// Builds the signed payload for this identity.
    #[must_use]
    pub fn payload(&self, version: &str, date: &str) -> String {
        build_payload(&self.first, &self.last, &self.email, version, date)
    }
}

/// Joins the normalized identity fields, version and date with `|`.
#[must_use]
pub fn build_payload(first: &str, last: &str, email: &str, version: &str, date: &str) -> String {
    let mut payload = String::with_capacity(
        first.len() + last.len() + email.len() + version.len() + date.len() + 4,
    );
    for field in [normalize(first), normalize(last), normalize(email)] {
        payload.push_str(&field);
        payload.push(FIELD_SEPARATOR);
    }
    payload.push_str(version);
    payload.push(FIELD_SEPARATOR);
    payload.push_str(date);
    payload
}
