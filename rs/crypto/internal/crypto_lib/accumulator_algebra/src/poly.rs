use crate::*;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// The operations a polynomial needs from its coefficient type
///
/// This is implemented by [`EccScalar`] (coefficients in the field) and by
/// [`EccPoint`] (coefficients "in the exponent"). Addition, scaling and
/// Horner evaluation are written once against this trait.
pub trait PolynomialCoefficient: Copy + Eq + fmt::Debug {
    /// The additive identity of the coefficient type on `curve`
    fn identity(curve: EccCurveType) -> Self;

    fn is_identity(&self) -> bool;

    fn curve_type(&self) -> EccCurveType;

    fn add_coefficients(&self, other: &Self) -> AlgebraResult<Self>;

    fn mul_by_scalar(&self, scalar: &EccScalar) -> AlgebraResult<Self>;
}

impl PolynomialCoefficient for EccScalar {
    fn identity(curve: EccCurveType) -> Self {
        EccScalar::zero(curve)
    }

    fn is_identity(&self) -> bool {
        self.is_zero()
    }

    fn curve_type(&self) -> EccCurveType {
        EccScalar::curve_type(self)
    }

    fn add_coefficients(&self, other: &Self) -> AlgebraResult<Self> {
        self.add(other)
    }

    fn mul_by_scalar(&self, scalar: &EccScalar) -> AlgebraResult<Self> {
        self.mul(scalar)
    }
}

impl PolynomialCoefficient for EccPoint {
    fn identity(curve: EccCurveType) -> Self {
        EccPoint::identity(curve)
    }

    fn is_identity(&self) -> bool {
        EccPoint::is_identity(self)
    }

    fn curve_type(&self) -> EccCurveType {
        EccPoint::curve_type(self)
    }

    fn add_coefficients(&self, other: &Self) -> AlgebraResult<Self> {
        self.add_points(other)
    }

    fn mul_by_scalar(&self, scalar: &EccScalar) -> AlgebraResult<Self> {
        self.scalar_mul(scalar)
    }
}

/// A polynomial whose coefficients are either scalars or curve points
///
/// The coefficients are stored in little-endian ordering, ie a_0 is
/// self.coefficients[0]. A polynomial of length n has degree n - 1; the
/// empty polynomial is the zero polynomial.
///
/// Every coefficient is guaranteed to be defined and to belong to the
/// polynomial's curve; this is checked once, when the polynomial is
/// constructed.
#[derive(Clone, Debug)]
pub struct Polynomial<C> {
    curve: EccCurveType,
    coefficients: Vec<C>,
}

/// A polynomial over the scalar field
pub type ScalarPolynomial = Polynomial<EccScalar>;

/// A polynomial "in the exponent", whose coefficients are group elements
pub type PointPolynomial = Polynomial<EccPoint>;

impl<C: PolynomialCoefficient> Eq for Polynomial<C> {}

impl<C: PolynomialCoefficient> PartialEq for Polynomial<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.curve != other.curve {
            return false;
        }

        // Accept trailing zero coefficients
        let max_coef = std::cmp::max(self.coefficients.len(), other.coefficients.len());

        (0..max_coef).all(|i| self.coeff(i) == other.coeff(i))
    }
}

impl<C: PolynomialCoefficient> Polynomial<C> {
    pub fn new(curve: EccCurveType, coefficients: Vec<C>) -> AlgebraResult<Self> {
        if !coefficients.iter().all(|c| c.curve_type() == curve) {
            return Err(AlgebraError::CurveMismatch);
        }

        tracing::trace!(%curve, coefficients = coefficients.len(), "constructed polynomial");

        Ok(Self::from_validated(curve, coefficients))
    }

    /// Internal constructor for results of arithmetic on validated inputs
    fn from_validated(curve: EccCurveType, coefficients: Vec<C>) -> Self {
        Self {
            curve,
            coefficients,
        }
    }

    /// Create a polynomial from coefficients which may be undefined
    ///
    /// Fails with [`AlgebraError::NilCoefficient`] naming the first `None`,
    /// in which case nothing is constructed.
    pub fn from_optional(
        curve: EccCurveType,
        coefficients: Vec<Option<C>>,
    ) -> AlgebraResult<Self> {
        let mut defined = Vec::with_capacity(coefficients.len());
        for (index, c) in coefficients.into_iter().enumerate() {
            defined.push(c.ok_or(AlgebraError::NilCoefficient { index })?);
        }
        Self::new(curve, defined)
    }

    /// Returns the polynomial with no coefficients
    pub fn zero(curve: EccCurveType) -> Self {
        Self {
            curve,
            coefficients: vec![],
        }
    }

    pub fn curve_type(&self) -> EccCurveType {
        self.curve
    }

    pub fn coefficients(&self) -> &[C] {
        &self.coefficients
    }

    /// Number of stored coefficients, including trailing zeros
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns len() - 1, or None for the empty polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Return the count of coefficients up to and including the highest
    /// non-zero one
    pub fn non_zero_coefficients(&self) -> usize {
        let zeros = self
            .coefficients
            .iter()
            .rev()
            .take_while(|c| c.is_identity())
            .count();

        self.coefficients.len() - zeros
    }

    fn coeff(&self, idx: usize) -> C {
        match self.coefficients.get(idx) {
            Some(c) => *c,
            None => C::identity(self.curve),
        }
    }

    /// Append a coefficient for the next higher power of x
    pub fn push(&mut self, coefficient: C) -> AlgebraResult<()> {
        if coefficient.curve_type() != self.curve {
            return Err(AlgebraError::CurveMismatch);
        }
        self.coefficients.push(coefficient);
        Ok(())
    }

    /// Polynomial addition
    ///
    /// The result has as many coefficients as the longer operand. The shorter
    /// operand is padded with the identity, so the excess coefficients of the
    /// longer operand are carried over unchanged.
    pub fn add(&self, rhs: &Self) -> AlgebraResult<Self> {
        if self.curve != rhs.curve {
            return Err(AlgebraError::CurveMismatch);
        }

        let max_coef = std::cmp::max(self.coefficients.len(), rhs.coefficients.len());

        let mut res = Vec::with_capacity(max_coef);
        for idx in 0..max_coef {
            res.push(self.coeff(idx).add_coefficients(&rhs.coeff(idx))?);
        }
        Ok(Self::from_validated(self.curve, res))
    }

    /// Multiply every coefficient by `scalar`
    pub fn mul_scalar(&self, scalar: &EccScalar) -> AlgebraResult<Self> {
        if self.curve != scalar.curve_type() {
            return Err(AlgebraError::CurveMismatch);
        }

        let coeffs = self
            .coefficients
            .iter()
            .map(|c| c.mul_by_scalar(scalar))
            .collect::<AlgebraResult<Vec<_>>>()?;

        Ok(Self::from_validated(self.curve, coeffs))
    }

    /// Evaluate the polynomial at x
    ///
    /// This uses Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
    ///
    /// For point coefficients the multiplication by x is a scalar
    /// multiplication and the addition is the group operation, so
    /// evaluating the lift g*p(X) at x yields g*p(x).
    pub fn evaluate_at(&self, x: &EccScalar) -> AlgebraResult<C> {
        if self.curve != x.curve_type() {
            return Err(AlgebraError::CurveMismatch);
        }

        let mut coefficients = self.coefficients.iter().rev();
        let mut ans = *coefficients.next().ok_or(AlgebraError::EmptyPolynomial)?;

        for coeff in coefficients {
            ans = ans.mul_by_scalar(x)?.add_coefficients(coeff)?;
        }
        Ok(ans)
    }
}

impl Polynomial<EccScalar> {
    /// Creates a random polynomial with the specified number of coefficients
    pub fn random<R: CryptoRng + RngCore>(
        curve: EccCurveType,
        num_coefficients: usize,
        rng: &mut R,
    ) -> Self {
        let coefficients = (0..num_coefficients)
            .map(|_| EccScalar::random(curve, rng))
            .collect();

        Self::from_validated(curve, coefficients)
    }

    /// Return the monic polynomial whose roots are exactly `roots`
    ///
    /// Computes (x - r_0)(x - r_1)...(x - r_{n-1}). With no roots this is
    /// the constant polynomial 1.
    pub fn from_roots(curve: EccCurveType, roots: &[EccScalar]) -> AlgebraResult<Self> {
        let one = EccScalar::one(curve);
        let mut poly = Self::from_validated(curve, vec![one]);

        for root in roots {
            if root.curve_type() != curve {
                return Err(AlgebraError::CurveMismatch);
            }
            let linear = Self::from_validated(curve, vec![root.negate(), one]);
            poly = poly.mul(&linear)?;
        }

        Ok(poly)
    }

    /// Polynomial subtraction
    ///
    /// Excess coefficients of `self` are carried over, excess coefficients
    /// of `rhs` are negated.
    pub fn sub(&self, rhs: &Self) -> AlgebraResult<Self> {
        if self.curve != rhs.curve {
            return Err(AlgebraError::CurveMismatch);
        }

        let max_coef = std::cmp::max(self.coefficients.len(), rhs.coefficients.len());

        let mut res = Vec::with_capacity(max_coef);
        for idx in 0..max_coef {
            res.push(self.coeff(idx).sub(&rhs.coeff(idx))?);
        }
        Ok(Self::from_validated(self.curve, res))
    }

    /// Compute product of a polynomial and a polynomial
    ///
    /// If either operand is empty so is the result, otherwise the result
    /// has len(self) + len(rhs) - 1 coefficients.
    pub fn mul(&self, rhs: &Self) -> AlgebraResult<Self> {
        if self.curve != rhs.curve {
            return Err(AlgebraError::CurveMismatch);
        }

        if self.coefficients.is_empty() || rhs.coefficients.is_empty() {
            return Ok(Self::zero(self.curve));
        }

        let n_coeffs = self.coefficients.len() + rhs.coefficients.len() - 1;

        let mut coeffs = vec![EccScalar::zero(self.curve); n_coeffs];
        for (i, ca) in self.coefficients.iter().enumerate() {
            for (j, cb) in rhs.coefficients.iter().enumerate() {
                let tmp = ca.mul(cb)?;
                coeffs[i + j] = coeffs[i + j].add(&tmp)?;
            }
        }
        Ok(Self::from_validated(self.curve, coeffs))
    }

    /// Lift the polynomial into the group
    ///
    /// Each coefficient c is replaced by base*c. Evaluating the result at x
    /// gives base*p(x).
    pub fn commit(&self, base: &EccPoint) -> AlgebraResult<PointPolynomial> {
        if self.curve != base.curve_type() {
            return Err(AlgebraError::CurveMismatch);
        }

        let points = self
            .coefficients
            .iter()
            .map(|c| base.scalar_mul(c))
            .collect::<AlgebraResult<Vec<_>>>()?;

        Ok(Polynomial::from_validated(self.curve, points))
    }
}
