//! RFC 4648 Base32 encoding without padding.
//!
//! Only encoding is provided: license verification re-derives and re-encodes
//! the expected signature instead of decoding the candidate.

/// The 32-symbol alphabet: `A`–`Z` followed by `2`–`7`.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Bytes per encoding group.
const GROUP_BYTES: usize = 5;

/// Returns the encoded length of `len` input bytes: `ceil(8 * len / 5)`.
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(5)
}

/// Returns true if `byte` is one of the 32 alphabet symbols.
#[must_use]
pub const fn is_symbol(byte: u8) -> bool {
    byte.is_ascii_uppercase() || matches!(byte, b'2'..=b'7')
}

/// Encodes `data` as unpadded Base32.
///
/// Each 5-byte group becomes 8 symbols. A trailing partial group is zero
/// filled on the low end and emits only the symbols that carry input bits.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    for chunk in data.chunks(GROUP_BYTES) {
        let mut group = [0u8; 8];
        group[3..3 + chunk.len()].copy_from_slice(chunk);
        let bits = u64::from_be_bytes(group);

        for i in 0..encoded_len(chunk.len()) {
            let shift = 35 - 5 * i;
            let index = ((bits >> shift) & 0x1f) as usize;
            out.push(char::from(ALPHABET[index]));
        }
    }

    out
}
