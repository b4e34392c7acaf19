//! Shared test helpers for license tests.

#![allow(dead_code)]

use licensegen_license::{IssueDate, LicenseGenerator, LicenseVerifier, Secret};

/// Returns a deterministic secret: bytes 1 through 32.
pub fn test_secret() -> Secret {
    let bytes: [u8; 32] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32,
    ];
    Secret::from_bytes(bytes)
}

/// A second secret that shares nothing with [`test_secret`].
pub fn other_secret() -> Secret {
    Secret::from_bytes([0xee; 32])
}

pub fn generator() -> LicenseGenerator {
    LicenseGenerator::new(test_secret())
}

pub fn verifier() -> LicenseVerifier {
    LicenseVerifier::new(test_secret())
}

/// 2024-01-01, the date used by the fixed vectors below.
pub fn new_year_2024() -> IssueDate {
    IssueDate::parse("20240101").unwrap()
}

/// Key for ("Ada", "Lovelace", "ada@example.com") on 20240101 under
/// [`test_secret`].
pub const ADA_KEY: &str = "V1-20240101-ULVM-HOSD-TWV5";

/// The full 18-character signature behind [`ADA_KEY`].
pub const ADA_CANONICAL_SIGNATURE: &str = "ULVMHOSDTWV5UXWCE6";

/// Key for ("Grace", "Hopper", "grace@navy.mil") on 19991231 under
/// [`test_secret`].
pub const GRACE_KEY: &str = "V1-19991231-PUWV-WHCA-AF6G";

/// Replaces the character at `index` with a different Base32 symbol.
pub fn flip_char(key: &str, index: usize) -> String {
    let mut chars: Vec<char> = key.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}
