//! Signature derivation shared by the generator and the verifier.

use crate::key::MAX_SIGNATURE_LEN;
use crate::secret::Secret;
use licensegen_crypto::{base32_encode, hmac_sha256};
use zeroize::Zeroize;

/// Computes the canonical signature for `payload`: the first
/// [`MAX_SIGNATURE_LEN`] Base32 characters of `HMAC-SHA256(secret, payload)`.
pub(crate) fn canonical_signature(secret: &Secret, payload: &str) -> String {
    let mut tag = hmac_sha256(secret.as_bytes(), payload.as_bytes());
    let mut encoded = base32_encode(&tag);
    tag.zeroize();

    let signature = encoded[..MAX_SIGNATURE_LEN.min(encoded.len())].to_owned();
    encoded.zeroize();
    signature
}
