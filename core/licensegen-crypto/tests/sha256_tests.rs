use licensegen_crypto::{BLOCK_SIZE, DIGEST_SIZE, Sha256, sha256};
use pretty_assertions::assert_eq;

fn hex_digest(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

// ── Published vectors ────────────────────────────────────────────

#[test]
fn empty_input() {
    assert_eq!(
        hex_digest(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn abc() {
    assert_eq!(
        hex_digest(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn two_block_message() {
    assert_eq!(
        hex_digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn long_message() {
    assert_eq!(
        hex_digest(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
        ),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn quick_brown_fox() {
    assert_eq!(
        hex_digest(b"The quick brown fox jumps over the lazy dog"),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
}

#[test]
fn one_million_a() {
    let mut hasher = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk);
    }
    assert_eq!(
        hex::encode(hasher.finalize()),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

// ── Incremental interface ────────────────────────────────────────

#[test]
fn byte_at_a_time_matches_one_shot() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let mut hasher = Sha256::new();
    for byte in &data {
        hasher.update(std::slice::from_ref(byte));
    }
    assert_eq!(hasher.finalize(), sha256(&data));
}

#[test]
fn empty_updates_are_ignored() {
    let mut hasher = Sha256::new();
    hasher.update(b"");
    hasher.update(b"abc");
    hasher.update(b"");
    assert_eq!(hasher.finalize(), sha256(b"abc"));
}

#[test]
fn chunks_straddling_block_boundary() {
    let data = [0x5au8; 3 * BLOCK_SIZE + 7];
    let mut hasher = Sha256::new();
    hasher.update(&data[..BLOCK_SIZE - 1]);
    hasher.update(&data[BLOCK_SIZE - 1..BLOCK_SIZE + 1]);
    hasher.update(&data[BLOCK_SIZE + 1..]);
    assert_eq!(hasher.finalize(), sha256(&data));
}

#[test]
fn default_is_fresh_context() {
    assert_eq!(Sha256::default().finalize(), sha256(b""));
}

#[test]
fn cloned_context_continues_independently() {
    let mut hasher = Sha256::new();
    hasher.update(b"ab");
    let mut fork = hasher.clone();
    hasher.update(b"c");
    fork.update(b"d");
    assert_eq!(hasher.finalize(), sha256(b"abc"));
    assert_eq!(fork.finalize(), sha256(b"abd"));
}

#[test]
fn padding_boundaries() {
    // Lengths around the point where the length suffix no longer fits.
    for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 128] {
        let data = vec![0xa5u8; len];
        let mut hasher = Sha256::new();
        hasher.update(&data);
        let digest = hasher.finalize();
        assert_eq!(digest.len(), DIGEST_SIZE);
        assert_eq!(digest, sha256(&data), "length {len}");
    }
}

#[test]
fn debug_does_not_leak_buffer() {
    let mut hasher = Sha256::new();
    hasher.update(b"secret material");
    let rendered = format!("{hasher:?}");
    assert!(rendered.contains("length"));
    assert!(!rendered.contains("secret"));
}
