#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]

//! Domain separated iterative key derivation
//!
//! Derives a single 32 byte output from an ordered list of values by
//! running HKDF-SHA256 once per value. Each invocation binds the value
//! to everything that preceded it:
//!
//! ```text
//! okm_0 = 0^32
//! okm_i = HKDF(salt = 0^32, ikm = f_i || value_i || okm_{i-1}, info)
//! ```
//!
//! where `f_0` is 32 bytes of `0xFF` and `f_{i+1} = byte_sub(f_i)`. The
//! changing prefix keeps identical values at different positions of the
//! chain from producing the same key material, similar to the prefix
//! trick used by XEdDSA, while the chained `okm` makes the output depend
//! on the full sequence as in X3DH.

use hkdf::SimpleHkdf;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroizing;

/// Length in bytes of the prefix, the salt and the produced output
pub const HASH_CHAIN_OUTPUT_BYTES: usize = 32;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum HashChainError {
    #[error("at least one value is required")]
    EmptyInput,
    #[error("value at index {index} is undefined")]
    NilValue { index: usize },
    #[error("key derivation could not produce {expected} bytes")]
    DerivationShortfall { expected: usize },
}

pub type HashChainResult<T> = std::result::Result<T, HashChainError>;

/// Compute the hash chain of `values` under the protocol label `info`
///
/// Fails if `values` is empty, or if HKDF cannot produce the requested
/// output length.
pub fn hash_chain(
    info: &[u8],
    values: &[&[u8]],
) -> HashChainResult<[u8; HASH_CHAIN_OUTPUT_BYTES]> {
    if values.is_empty() {
        return Err(HashChainError::EmptyInput);
    }

    tracing::trace!(values = values.len(), info_len = info.len(), "computing hash chain");

    let salt = [0u8; HASH_CHAIN_OUTPUT_BYTES];
    let mut prefix = Zeroizing::new([0xFFu8; HASH_CHAIN_OUTPUT_BYTES]);
    let mut okm = Zeroizing::new([0u8; HASH_CHAIN_OUTPUT_BYTES]);

    for value in values {
        let mut ikm = Zeroizing::new(Vec::with_capacity(prefix.len() + value.len() + okm.len()));
        ikm.extend_from_slice(&prefix[..]);
        ikm.extend_from_slice(value);
        ikm.extend_from_slice(&okm[..]);

        let kdf = SimpleHkdf::<Sha256>::new(Some(&salt), &ikm);
        kdf.expand(info, &mut okm[..])
            .map_err(|_| HashChainError::DerivationShortfall {
                expected: HASH_CHAIN_OUTPUT_BYTES,
            })?;

        byte_sub(&mut prefix[..]);
    }

    Ok(*okm)
}

/// Compute the hash chain of values which may be undefined
///
/// Any `None` is rejected before anything is derived; the error names the
/// first undefined position.
pub fn hash_chain_checked(
    info: &[u8],
    values: &[Option<&[u8]>],
) -> HashChainResult<[u8; HASH_CHAIN_OUTPUT_BYTES]> {
    let mut defined = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match value {
            Some(v) => defined.push(*v),
            None => return Err(HashChainError::NilValue { index }),
        }
    }
    hash_chain(info, &defined)
}

/// Subtract one from `buf` in constant time
///
/// Bytes are scanned from index 0 upwards. The first byte is decremented;
/// whenever a byte reaches zero it is replaced by 0xFF and the borrow moves
/// on to the next index. No branch depends on the contents of `buf`.
///
/// Starting from all 0xFF bytes, successive calls yield `FE FF ..`,
/// `FD FF ..`, and so on, and `01 01 FF ..` becomes `FF FF FE ..`.
pub fn byte_sub(buf: &mut [u8]) {
    let mut borrow = 1u8;
    for b in buf.iter_mut() {
        *b = (*b).wrapping_sub(borrow);

        // 1 iff the byte is now zero
        let is_zero = (*b).ct_eq(&0u8).unwrap_u8();

        borrow &= is_zero;
        *b |= is_zero.wrapping_neg();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_sub_of_a_single_byte_only_touches_that_byte() {
        let mut buf = [0x10u8];
        byte_sub(&mut buf);
        assert_eq!(buf, [0x0F]);
    }

    #[test]
    fn byte_sub_maps_one_to_ff() {
        let mut buf = [0x01u8, 0x80];
        byte_sub(&mut buf);
        assert_eq!(buf, [0xFF, 0x7F]);
    }

    #[test]
    fn derivation_shortfall_reports_only_the_requested_length() {
        let err = HashChainError::DerivationShortfall {
            expected: HASH_CHAIN_OUTPUT_BYTES,
        };
        assert_eq!(err.to_string(), "key derivation could not produce 32 bytes");
    }

    #[test]
    fn byte_sub_on_empty_buffer_is_a_no_op() {
        let mut buf: [u8; 0] = [];
        byte_sub(&mut buf);
        assert!(buf.is_empty());
    }
}
