#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]

//! Algebra used by pairing and Edwards curve based accumulators
//!
//! Provides polynomials whose coefficients are scalars, polynomials whose
//! coefficients are group elements (polynomials "in the exponent"), and
//! helpers to move between generic big integers and curve encodings.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AlgebraError {
    #[error("curve mismatch")]
    CurveMismatch,
    #[error("not a valid point encoding")]
    InvalidPoint,
    #[error("not a canonical scalar encoding")]
    InvalidScalar,
    #[error("coefficient at index {index} is undefined")]
    NilCoefficient { index: usize },
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,
}

pub type AlgebraResult<T> = std::result::Result<T, AlgebraError>;

mod codec;
mod group;
mod poly;

pub use codec::*;
pub use group::*;
pub use poly::*;
