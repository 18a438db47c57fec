use crate::*;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::Zeroize;

mod bls12_381_g1;
mod ed25519;

/// Elliptic curve type enum
///
/// Enumerates the groups supported by this library: the G1 group of the
/// BLS12-381 pairing curve, and the prime order subgroup of the Ed25519
/// twisted Edwards curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EccCurveType {
    Bls12_381G1,
    Ed25519,
}

impl EccCurveType {
    /// Return the length of a scalar (in bits)
    ///
    /// Scalar here refers to an integer in the range [0,z) where z is the
    /// group order.
    pub fn scalar_bits(&self) -> usize {
        match self {
            EccCurveType::Bls12_381G1 => 255,
            EccCurveType::Ed25519 => 253,
        }
    }

    /// Return the length of a scalar (in bytes, rounded up)
    pub fn scalar_bytes(&self) -> usize {
        self.scalar_bits().div_ceil(8)
    }

    /// Return the length of the underlying base field (in bits)
    pub fn field_bits(&self) -> usize {
        match self {
            EccCurveType::Bls12_381G1 => 381,
            EccCurveType::Ed25519 => 255,
        }
    }

    /// Return the length of the underlying base field (in bytes)
    ///
    /// If the field size is not an even multiple of 8 it is rounded up to the
    /// next byte size.
    pub fn field_bytes(&self) -> usize {
        self.field_bits().div_ceil(8)
    }

    /// Return the size of encoded (compressed) points, in bytes
    pub fn point_bytes(&self) -> usize {
        match self {
            EccCurveType::Bls12_381G1 => bls12_381_g1::Point::BYTES,
            EccCurveType::Ed25519 => ed25519::Point::BYTES,
        }
    }

    /// Return a vector over all available curve types
    ///
    /// This is mostly useful for tests
    pub fn all() -> Vec<EccCurveType> {
        vec![EccCurveType::Bls12_381G1, EccCurveType::Ed25519]
    }
}

impl fmt::Display for EccCurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let curve_name = match self {
            Self::Bls12_381G1 => "bls12_381_g1",
            Self::Ed25519 => "ed25519",
        };

        write!(f, "{}", curve_name)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Zeroize)]
pub enum EccScalar {
    Bls12_381G1(bls12_381_g1::Scalar),
    Ed25519(ed25519::Scalar),
}

impl fmt::Debug for EccScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(0x{})",
            self.curve_type(),
            hex::encode(self.serialize())
        )
    }
}

impl EccScalar {
    pub fn curve_type(&self) -> EccCurveType {
        match self {
            Self::Bls12_381G1(_) => EccCurveType::Bls12_381G1,
            Self::Ed25519(_) => EccCurveType::Ed25519,
        }
    }

    /// Return the sum of two scalar values
    pub fn add(&self, other: &EccScalar) -> AlgebraResult<Self> {
        match (self, other) {
            (Self::Bls12_381G1(s1), Self::Bls12_381G1(s2)) => Ok(Self::Bls12_381G1(s1.add(s2))),
            (Self::Ed25519(s1), Self::Ed25519(s2)) => Ok(Self::Ed25519(s1.add(s2))),
            (_, _) => Err(AlgebraError::CurveMismatch),
        }
    }

    /// Return the difference of two scalar values
    pub fn sub(&self, other: &EccScalar) -> AlgebraResult<Self> {
        match (self, other) {
            (Self::Bls12_381G1(s1), Self::Bls12_381G1(s2)) => Ok(Self::Bls12_381G1(s1.sub(s2))),
            (Self::Ed25519(s1), Self::Ed25519(s2)) => Ok(Self::Ed25519(s1.sub(s2))),
            (_, _) => Err(AlgebraError::CurveMismatch),
        }
    }

    /// Return the product of two scalar values
    pub fn mul(&self, other: &EccScalar) -> AlgebraResult<Self> {
        match (self, other) {
            (Self::Bls12_381G1(s1), Self::Bls12_381G1(s2)) => Ok(Self::Bls12_381G1(s1.mul(s2))),
            (Self::Ed25519(s1), Self::Ed25519(s2)) => Ok(Self::Ed25519(s1.mul(s2))),
            (_, _) => Err(AlgebraError::CurveMismatch),
        }
    }

    /// Negation within the scalar field
    ///
    /// Returns z - self where z is the group order.
    pub fn negate(&self) -> Self {
        match self {
            Self::Bls12_381G1(s) => Self::Bls12_381G1(s.negate()),
            Self::Ed25519(s) => Self::Ed25519(s.negate()),
        }
    }

    /// Serialize the scalar in the curve's canonical fixed length encoding
    ///
    /// For BLS12-381 this is big-endian, for Ed25519 little-endian.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Bls12_381G1(s) => s.serialize().to_vec(),
            Self::Ed25519(s) => s.serialize().to_vec(),
        }
    }

    /// Deserialize a scalar in the curve's canonical encoding
    ///
    /// Fails if the length is wrong or the value is not reduced.
    pub fn deserialize(curve: EccCurveType, bytes: &[u8]) -> AlgebraResult<Self> {
        if bytes.len() != curve.scalar_bytes() {
            return Err(AlgebraError::InvalidScalar);
        }

        match curve {
            EccCurveType::Bls12_381G1 => {
                let s = bls12_381_g1::Scalar::deserialize(bytes)
                    .ok_or(AlgebraError::InvalidScalar)?;
                Ok(Self::Bls12_381G1(s))
            }
            EccCurveType::Ed25519 => {
                let s = ed25519::Scalar::deserialize(bytes).ok_or(AlgebraError::InvalidScalar)?;
                Ok(Self::Ed25519(s))
            }
        }
    }

    /// Generate a random scalar in [0,z)
    ///
    /// 64 random bytes are reduced modulo the group order, which keeps the
    /// bias negligible.
    pub fn random<R: CryptoRng + RngCore>(curve: EccCurveType, rng: &mut R) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);

        let s = match curve {
            EccCurveType::Bls12_381G1 => {
                Self::Bls12_381G1(bls12_381_g1::Scalar::from_wide_bytes(&wide))
            }
            EccCurveType::Ed25519 => Self::Ed25519(ed25519::Scalar::from_wide_bytes(&wide)),
        };
        wide.zeroize();
        s
    }

    /// Return true iff self is equal to zero
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bls12_381G1(s) => s.is_zero(),
            Self::Ed25519(s) => s.is_zero(),
        }
    }

    /// Return the scalar 0
    pub fn zero(curve: EccCurveType) -> Self {
        match curve {
            EccCurveType::Bls12_381G1 => Self::Bls12_381G1(bls12_381_g1::Scalar::zero()),
            EccCurveType::Ed25519 => Self::Ed25519(ed25519::Scalar::zero()),
        }
    }

    /// Return the scalar 1
    pub fn one(curve: EccCurveType) -> Self {
        match curve {
            EccCurveType::Bls12_381G1 => Self::Bls12_381G1(bls12_381_g1::Scalar::one()),
            EccCurveType::Ed25519 => Self::Ed25519(ed25519::Scalar::one()),
        }
    }

    /// Return a small scalar value
    pub fn from_u64(curve: EccCurveType, n: u64) -> Self {
        match curve {
            EccCurveType::Bls12_381G1 => Self::Bls12_381G1(bls12_381_g1::Scalar::from(n)),
            EccCurveType::Ed25519 => Self::Ed25519(ed25519::Scalar::from(n)),
        }
    }

    /// Return the additive inverse of a small scalar value
    pub fn from_i64(curve: EccCurveType, n: i64) -> Self {
        let s = Self::from_u64(curve, n.unsigned_abs());
        if n < 0 {
            s.negate()
        } else {
            s
        }
    }
}

#[derive(Deserialize, Serialize)]
struct EccScalarSerializationHelper {
    curve_type: EccCurveType,
    raw: Vec<u8>,
}

impl Serialize for EccScalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let helper = EccScalarSerializationHelper {
            curve_type: self.curve_type(),
            raw: self.serialize(),
        };
        helper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EccScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let helper: EccScalarSerializationHelper = Deserialize::deserialize(deserializer)?;
        EccScalar::deserialize(helper.curve_type, &helper.raw)
            .map_err(|e| serde::de::Error::custom(format!("{:?}", e)))
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub enum EccPoint {
    Bls12_381G1(bls12_381_g1::Point),
    Ed25519(ed25519::Point),
}

impl fmt::Debug for EccPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.curve_type(),
            hex::encode(self.serialize())
        )
    }
}

impl EccPoint {
    /// Return a point which is the identity element on the curve
    pub fn identity(curve: EccCurveType) -> Self {
        match curve {
            EccCurveType::Bls12_381G1 => Self::Bls12_381G1(bls12_381_g1::Point::identity()),
            EccCurveType::Ed25519 => Self::Ed25519(ed25519::Point::identity()),
        }
    }

    /// Return the "standard" generator for this curve
    pub fn generator_g(curve: EccCurveType) -> Self {
        match curve {
            EccCurveType::Bls12_381G1 => Self::Bls12_381G1(bls12_381_g1::Point::generator()),
            EccCurveType::Ed25519 => Self::Ed25519(ed25519::Point::generator()),
        }
    }

    pub fn curve_type(&self) -> EccCurveType {
        match self {
            Self::Bls12_381G1(_) => EccCurveType::Bls12_381G1,
            Self::Ed25519(_) => EccCurveType::Ed25519,
        }
    }

    /// Add two elliptic curve points
    pub fn add_points(&self, other: &Self) -> AlgebraResult<Self> {
        match (self, other) {
            (Self::Bls12_381G1(pt1), Self::Bls12_381G1(pt2)) => {
                Ok(Self::Bls12_381G1(pt1.add(pt2)))
            }
            (Self::Ed25519(pt1), Self::Ed25519(pt2)) => Ok(Self::Ed25519(pt1.add(pt2))),
            (_, _) => Err(AlgebraError::CurveMismatch),
        }
    }

    /// Subtract two elliptic curve points
    pub fn sub_points(&self, other: &Self) -> AlgebraResult<Self> {
        match (self, other) {
            (Self::Bls12_381G1(pt1), Self::Bls12_381G1(pt2)) => {
                Ok(Self::Bls12_381G1(pt1.sub(pt2)))
            }
            (Self::Ed25519(pt1), Self::Ed25519(pt2)) => Ok(Self::Ed25519(pt1.sub(pt2))),
            (_, _) => Err(AlgebraError::CurveMismatch),
        }
    }

    pub fn negate(&self) -> Self {
        match self {
            Self::Bls12_381G1(pt) => Self::Bls12_381G1(pt.negate()),
            Self::Ed25519(pt) => Self::Ed25519(pt.negate()),
        }
    }

    /// Perform point*scalar multiplication
    pub fn scalar_mul(&self, scalar: &EccScalar) -> AlgebraResult<Self> {
        match (self, scalar) {
            (Self::Bls12_381G1(pt), EccScalar::Bls12_381G1(s)) => {
                Ok(Self::Bls12_381G1(pt.mul(s)))
            }
            (Self::Ed25519(pt), EccScalar::Ed25519(s)) => Ok(Self::Ed25519(pt.mul(s))),
            (_, _) => Err(AlgebraError::CurveMismatch),
        }
    }

    pub fn mul_by_g(scalar: &EccScalar) -> AlgebraResult<Self> {
        Self::generator_g(scalar.curve_type()).scalar_mul(scalar)
    }

    /// Return true if this is the identity element
    pub fn is_identity(&self) -> bool {
        match self {
            Self::Bls12_381G1(pt) => pt.is_identity(),
            Self::Ed25519(pt) => pt.is_identity(),
        }
    }

    /// Serialize a point in compressed form
    ///
    /// BLS12-381 G1 points use the 48 byte zcash encoding, Ed25519 points
    /// the 32 byte compressed Edwards y coordinate.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Bls12_381G1(pt) => pt.serialize().to_vec(),
            Self::Ed25519(pt) => pt.serialize().to_vec(),
        }
    }

    /// Deserialize a compressed point
    pub fn deserialize(curve: EccCurveType, bytes: &[u8]) -> AlgebraResult<Self> {
        if bytes.len() != curve.point_bytes() {
            return Err(AlgebraError::InvalidPoint);
        }

        match curve {
            EccCurveType::Bls12_381G1 => {
                let pt =
                    bls12_381_g1::Point::deserialize(bytes).ok_or(AlgebraError::InvalidPoint)?;
                Ok(Self::Bls12_381G1(pt))
            }
            EccCurveType::Ed25519 => {
                let pt = ed25519::Point::deserialize(bytes).ok_or(AlgebraError::InvalidPoint)?;
                Ok(Self::Ed25519(pt))
            }
        }
    }
}

#[derive(Deserialize, Serialize)]
struct EccPointSerializationHelper {
    curve_type: EccCurveType,
    raw: Vec<u8>,
}

impl Serialize for EccPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let helper = EccPointSerializationHelper {
            curve_type: self.curve_type(),
            raw: self.serialize(),
        };
        helper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EccPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let helper: EccPointSerializationHelper = Deserialize::deserialize(deserializer)?;
        EccPoint::deserialize(helper.curve_type, &helper.raw)
            .map_err(|e| serde::de::Error::custom(format!("{:?}", e)))
    }
}
