use acc_crypto_internal_hash_chain::*;
use assert_matches::assert_matches;
use proptest::prelude::*;

const LABEL: &[u8] = b"accumulator";

fn chain_hex(info: &[u8], values: &[&[u8]]) -> String {
    hex::encode(hash_chain(info, values).expect("hash chain failed"))
}

#[test]
fn hash_chain_known_answers() {
    assert_eq!(
        chain_hex(LABEL, &[b"hello"]),
        "8041fa3204babbf8f244f9a18ba5186c07351e8fd9ad78a67ac6d025a26a76b1"
    );
    assert_eq!(
        chain_hex(LABEL, &[b"hello", b"world"]),
        "1adfa68278b27949e03c6fc03a0ffd160428ed44bd7c8aa433aa0f7a40011384"
    );
    assert_eq!(
        chain_hex(LABEL, &[b"", b""]),
        "0019fb38c3d3a4bb4b887b8c099c926edabdf025025b5f9b61c2d5f8e05f4f60"
    );
    assert_eq!(
        chain_hex(b"", &[b"a"]),
        "a699e7eaeaf47901a0d46bbf6fdcb6954c95a7cc097ba72abe3a51b449df3b5b"
    );
}

#[test]
fn hash_chain_rejects_empty_input() {
    assert_eq!(hash_chain(LABEL, &[]), Err(HashChainError::EmptyInput));
    assert_eq!(
        hash_chain_checked(LABEL, &[]),
        Err(HashChainError::EmptyInput)
    );
}

#[test]
fn hash_chain_rejects_undefined_values() {
    assert_matches!(
        hash_chain_checked(LABEL, &[None]),
        Err(HashChainError::NilValue { index: 0 })
    );
    assert_matches!(
        hash_chain_checked(LABEL, &[Some(b"a".as_slice()), Some(b"b".as_slice()), None]),
        Err(HashChainError::NilValue { index: 2 })
    );
}

#[test]
fn hash_chain_checked_matches_unchecked_when_all_defined() {
    let values: [&[u8]; 3] = [b"x", b"", b"zz"];
    let optional: Vec<Option<&[u8]>> = values.iter().map(|v| Some(*v)).collect();
    assert_eq!(
        hash_chain(LABEL, &values),
        hash_chain_checked(LABEL, &optional)
    );
}

#[test]
fn repeated_values_are_domain_separated() {
    let once = hash_chain(LABEL, &[b"v"]).expect("hash chain failed");
    let twice = hash_chain(LABEL, &[b"v", b"v"]).expect("hash chain failed");
    assert_ne!(once, twice);
}

#[test]
fn hash_chain_depends_on_order_and_label() {
    let ab = hash_chain(LABEL, &[b"a", b"b"]).expect("hash chain failed");
    let ba = hash_chain(LABEL, &[b"b", b"a"]).expect("hash chain failed");
    let other_label = hash_chain(b"other", &[b"a", b"b"]).expect("hash chain failed");
    assert_ne!(ab, ba);
    assert_ne!(ab, other_label);
}

#[test]
fn byte_sub_decrements_leading_byte_first() {
    let mut f = [0xFFu8; 32];

    byte_sub(&mut f);
    assert_eq!(f[0], 0xFE);
    assert!(f[1..].iter().all(|b| *b == 0xFF));

    byte_sub(&mut f);
    assert_eq!(f[0], 0xFD);
    assert!(f[1..].iter().all(|b| *b == 0xFF));

    f[0] = 0x02;
    byte_sub(&mut f);
    assert_eq!(f[0], 0x01);
    assert!(f[1..].iter().all(|b| *b == 0xFF));

    byte_sub(&mut f);
    assert_eq!(f[0], 0xFF);
    assert_eq!(f[1], 0xFE);
    assert!(f[2..].iter().all(|b| *b == 0xFF));

    byte_sub(&mut f);
    assert_eq!(f[0], 0xFE);
    assert_eq!(f[1], 0xFE);
    assert!(f[2..].iter().all(|b| *b == 0xFF));

    f[0] = 0x01;
    f[1] = 0x01;
    byte_sub(&mut f);
    assert_eq!(f[0], 0xFF);
    assert_eq!(f[1], 0xFF);
    assert_eq!(f[2], 0xFE);
    assert!(f[3..].iter().all(|b| *b == 0xFF));
}

#[test]
fn byte_sub_of_all_ones_wraps_every_byte() {
    let mut f = [0x01u8; 32];
    byte_sub(&mut f);
    assert_eq!(f, [0xFF; 32]);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    #[test]
    fn hash_chain_is_deterministic(
        info in proptest::collection::vec(any::<u8>(), 0..64),
        values in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 1..8),
    ) {
        let refs: Vec<&[u8]> = values.iter().map(|v| v.as_slice()).collect();
        prop_assert_eq!(hash_chain(&info, &refs)?, hash_chain(&info, &refs)?);
    }

    #[test]
    fn flipping_any_bit_changes_the_output(
        values in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 1..32), 1..6),
        which in any::<prop::sample::Index>(),
        byte in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let refs: Vec<&[u8]> = values.iter().map(|v| v.as_slice()).collect();
        let baseline = hash_chain(LABEL, &refs)?;

        let mut modified = values.clone();
        let target = which.index(modified.len());
        let pos = byte.index(modified[target].len());
        modified[target][pos] ^= 1 << bit;

        let refs: Vec<&[u8]> = modified.iter().map(|v| v.as_slice()).collect();
        prop_assert_ne!(baseline, hash_chain(LABEL, &refs)?);
    }
}
