//! Conversions between generic big integers and curve encodings
//!
//! Protocol code carries values as unsigned big integers, which encode
//! big-endian, while Ed25519 scalars are little-endian. Points are taken to
//! be the compressed y coordinate written as a big-endian integer.

use crate::*;
use num_bigint::BigUint;

const ED25519_ENCODING_BYTES: usize = 32;

/// Number of bytes needed to hold any element of the curve's base field
pub fn field_size(curve: EccCurveType) -> usize {
    curve.field_bytes()
}

/// Return a copy of `bytes` in reverse order
pub fn reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Decode an Ed25519 point from its compressed encoding read as an integer
///
/// The big-endian bytes of `y` are left padded with zeros to 32 bytes and
/// decompressed as is.
pub fn big_int_to_point(y: &BigUint) -> AlgebraResult<EccPoint> {
    let be = y.to_bytes_be();
    if be.len() > ED25519_ENCODING_BYTES {
        return Err(AlgebraError::InvalidPoint);
    }

    let mut encoding = [0u8; ED25519_ENCODING_BYTES];
    encoding[ED25519_ENCODING_BYTES - be.len()..].copy_from_slice(&be);
    EccPoint::deserialize(EccCurveType::Ed25519, &encoding)
}

/// Decode an Ed25519 scalar from an integer
///
/// Fails unless 0 <= x < the group order.
pub fn big_int_to_scalar(x: &BigUint) -> AlgebraResult<EccScalar> {
    let le = reverse_bytes(&x.to_bytes_be());
    if le.len() > ED25519_ENCODING_BYTES {
        return Err(AlgebraError::InvalidScalar);
    }

    let mut encoding = [0u8; ED25519_ENCODING_BYTES];
    encoding[..le.len()].copy_from_slice(&le);
    EccScalar::deserialize(EccCurveType::Ed25519, &encoding)
}

/// Inverse of [`big_int_to_point`]
pub fn point_to_big_int(pt: &EccPoint) -> AlgebraResult<BigUint> {
    match pt.curve_type() {
        EccCurveType::Ed25519 => Ok(BigUint::from_bytes_be(&pt.serialize())),
        EccCurveType::Bls12_381G1 => Err(AlgebraError::CurveMismatch),
    }
}

/// Return the integer value of a scalar
///
/// For Ed25519 scalars this is the inverse of [`big_int_to_scalar`].
pub fn scalar_to_big_int(s: &EccScalar) -> BigUint {
    match s.curve_type() {
        EccCurveType::Bls12_381G1 => BigUint::from_bytes_be(&s.serialize()),
        EccCurveType::Ed25519 => BigUint::from_bytes_le(&s.serialize()),
    }
}
