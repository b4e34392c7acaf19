//! Identity-bound license keys.
//!
//! This crate handles:
//! - Canonicalizing identity fields (first name, last name, email)
//! - Signing `first|last|email|version|date` with HMAC-SHA256
//! - Formatting the signature as hyphen-grouped Base32
//! - Parsing and verifying candidate keys without ever panicking
//!
//! # License Key Format
//!
//! Keys are formatted as `VERSION-YYYYMMDD-XXXX-XXXX-XXXX`, for example
//! `V1-20240101-K7QF-2MZA-PX4C`. The signature groups are the first
//! [`DISPLAY_SIGNATURE_LEN`] characters of the Base32-encoded MAC. The
//! verifier accepts signatures of 1 to [`MAX_SIGNATURE_LEN`] characters and
//! echoes back whatever version and date the candidate carries, so keys from
//! older format revisions keep verifying.
//!
//! # Example
//!
//! ```rust
//! use licensegen_license::{IssueDate, LicenseGenerator, LicenseVerifier, Secret};
//!
//! let secret = Secret::from_bytes([0x42; 32]);
//! let generator = LicenseGenerator::new(secret.clone());
//! let verifier = LicenseVerifier::new(secret);
//!
//! let date = IssueDate::from_ymd(2024, 1, 1).unwrap();
//! let key = generator.generate_on("Ada", "Lovelace", "ada@example.com", &date);
//!
//! assert!(key.starts_with("V1-20240101-"));
//! assert!(verifier.verify(&key, " ada ", "LOVELACE", "Ada@Example.com"));
//! assert!(!verifier.verify(&key, "Ada", "X", "ada@example.com"));
//! ```
//!
//! There is no expiry, revocation or online validation: a valid key only
//! proves that it matches the identity and encodes its date.

mod date;
mod error;
mod generator;
mod key;
mod normalize;
mod payload;
mod secret;
mod signature;
mod verifier;

pub use date::{DATE_LEN, IssueDate};
pub use error::{LicenseError, LicenseResult};
pub use generator::{LicenseGenerator, generate};
pub use key::{
    DISPLAY_SIGNATURE_LEN, GROUP_LEN, LICENSE_VERSION, LicenseKey, MAX_SIGNATURE_LEN, SEPARATOR,
};
pub use normalize::normalize;
pub use payload::{FIELD_SEPARATOR, Identity, build_payload};
pub use secret::{SECRET_LEN, Secret};
pub use verifier::{LicenseVerifier, verify};
