use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::{Identity, IsIdentity};
use zeroize::Zeroize;

#[derive(Copy, Clone, Eq, PartialEq, Zeroize)]
pub struct Scalar {
    s: curve25519_dalek::Scalar,
}

impl Scalar {
    pub const BYTES: usize = 32;

    fn new(s: curve25519_dalek::Scalar) -> Self {
        Self { s }
    }

    /// Deserialize a scalar
    ///
    /// The encoding is 32 bytes little-endian, as used by Ed25519. Only
    /// canonical encodings (strictly less than the group order) are
    /// accepted.
    pub fn deserialize(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; Self::BYTES] = bytes.try_into().ok()?;
        Option::<curve25519_dalek::Scalar>::from(curve25519_dalek::Scalar::from_canonical_bytes(
            bytes,
        ))
        .map(Self::new)
    }

    pub fn serialize(&self) -> [u8; Self::BYTES] {
        self.s.to_bytes()
    }

    pub fn from_wide_bytes(bytes: &[u8; 64]) -> Self {
        Self::new(curve25519_dalek::Scalar::from_bytes_mod_order_wide(bytes))
    }

    pub fn zero() -> Self {
        Self::new(curve25519_dalek::Scalar::ZERO)
    }

    pub fn one() -> Self {
        Self::new(curve25519_dalek::Scalar::ONE)
    }

    pub fn from(v: u64) -> Self {
        Self::new(curve25519_dalek::Scalar::from(v))
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
        self.s == curve25519_dalek::Scalar::ZERO
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Point {
    p: EdwardsPoint,
}

impl Point {
    /// Length of a compressed Edwards y coordinate with sign bit
    pub const BYTES: usize = 32;

    fn new(p: EdwardsPoint) -> Self {
        Self { p }
    }

    pub fn identity() -> Self {
        Self::new(EdwardsPoint::identity())
    }

    pub fn generator() -> Self {
        Self::new(ED25519_BASEPOINT_POINT)
    }

    /// Deserialize a compressed point
    ///
    /// Any encoding which decompresses to a point on the curve is accepted,
    /// including points of small order.
    pub fn deserialize(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; Self::BYTES] = bytes.try_into().ok()?;
        CompressedEdwardsY(bytes).decompress().map(Self::new)
    }

    pub fn serialize(&self) -> [u8; Self::BYTES] {
        self.p.compress().to_bytes()
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
        self.p.is_identity()
    }
}
