use acc_crypto_internal_accumulator_algebra::*;
use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub fn reproducible_rng() -> impl Rng + CryptoRng {
    let mut thread_rng = rand::thread_rng();
    let mut bytes = [0u8; 32];
    thread_rng.fill(&mut bytes);
    println!("Copy the seed below to reproduce the failed test.");
    println!("let seed: [u8; 32] = {:?};", &bytes);
    ChaCha20Rng::from_seed(bytes)
}

/// Scalar polynomial with small signed integer coefficients, constant term first
pub fn scalar_poly(curve: EccCurveType, coeffs: &[i64]) -> ScalarPolynomial {
    let coeffs = coeffs
        .iter()
        .map(|c| EccScalar::from_i64(curve, *c))
        .collect();
    Polynomial::new(curve, coeffs).expect("coefficients are on the curve")
}

/// The lift of `scalar_poly` by the standard generator
pub fn point_poly(curve: EccCurveType, coeffs: &[i64]) -> PointPolynomial {
    scalar_poly(curve, coeffs)
        .commit(&EccPoint::generator_g(curve))
        .expect("generator is on the curve")
}

pub fn g_times(curve: EccCurveType, n: i64) -> EccPoint {
    EccPoint::mul_by_g(&EccScalar::from_i64(curve, n)).expect("scalar is on the curve")
}
