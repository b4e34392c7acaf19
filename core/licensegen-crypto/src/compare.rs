//! Timing-safe equality.

use subtle::ConstantTimeEq;

/// Compares two byte strings without exiting early on the first difference.
///
/// Lengths are compared first (they are not secret); equal-length inputs are
/// always scanned in full.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
