use ic_bls12_381::{G1Affine, G1Projective};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

#[derive(Copy, Clone, Eq, PartialEq, Zeroize)]
pub struct Scalar {
    s: ic_bls12_381::Scalar,
}

impl Scalar {
    pub const BYTES: usize = 32;

    /// Internal constructor (private)
    fn new(s: ic_bls12_381::Scalar) -> Self {
        Self { s }
    }

    /// Deserialize a scalar
    ///
    /// The encoding is 32 bytes big-endian. Returns None if the input has
    /// the wrong length or is not less than the group order.
    pub fn deserialize(bytes: &[u8]) -> Option<Self> {
        let mut le: [u8; Self::BYTES] = bytes.try_into().ok()?;
        le.reverse();

        Option::<ic_bls12_381::Scalar>::from(ic_bls12_381::Scalar::from_bytes(&le)).map(Self::new)
    }

    /// Serialize the scalar as 32 bytes big-endian
    pub fn serialize(&self) -> [u8; Self::BYTES] {
        let mut bytes = self.s.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Reduce 64 uniformly random bytes modulo the group order
    pub fn from_wide_bytes(bytes: &[u8; 64]) -> Self {
        Self::new(ic_bls12_381::Scalar::from_bytes_wide(bytes))
    }

    pub fn zero() -> Self {
        Self::new(ic_bls12_381::Scalar::from(0u64))
    }

    pub fn one() -> Self {
        Self::new(ic_bls12_381::Scalar::from(1u64))
    }

    pub fn from(v: u64) -> Self {
        Self::new(ic_bls12_381::Scalar::from(v))
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.s + other.s)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.s - other.s)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.s * other.s)
    }

    pub fn negate(&self) -> Self {
        Self::new(-self.s)
    }

    pub fn is_zero(&self) -> bool {
        bool::from(self.s.ct_eq(&ic_bls12_381::Scalar::from(0u64)))
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Point {
    p: G1Projective,
}

impl Point {
    /// Length of a compressed G1 point
    pub const BYTES: usize = 48;

    fn new(p: G1Projective) -> Self {
        Self { p }
    }

    pub fn identity() -> Self {
        Self::new(G1Projective::identity())
    }

    pub fn generator() -> Self {
        Self::new(G1Projective::generator())
    }

    /// Deserialize a compressed point
    ///
    /// Returns None if the encoding is malformed, not on the curve or not
    /// in the prime order subgroup.
    pub fn deserialize(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; Self::BYTES] = bytes.try_into().ok()?;
        let pt: Option<G1Affine> = G1Affine::from_compressed(&bytes).into();
        pt.map(|pt| Self::new(G1Projective::from(pt)))
    }

    pub fn serialize(&self) -> [u8; Self::BYTES] {
        G1Affine::from(self.p).to_compressed()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.p + other.p)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.p - other.p)
    }

    pub fn negate(&self) -> Self {
        Self::new(-self.p)
    }

    pub fn mul(&self, scalar: &Scalar) -> Self {
        Self::new(self.p * scalar.s)
    }

    pub fn is_identity(&self) -> bool {
        bool::from(self.p.is_identity())
    }
}
