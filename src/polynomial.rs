//! Polynomials over GF(256)

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::field;

/// Evaluates `c0 + c1*x + c2*x^2 + ...` at `x`
///
/// At `x = 0` every term but `c0` vanishes, which is how interpolation at
/// zero recovers the secret byte.
#[must_use]
pub fn evaluate(coefficients: &[u8], x: u8) -> u8 {
    let mut result = 0;
    let mut power = 1;
    for &coefficient in coefficients {
        result = field::add(result, field::mul(coefficient, power));
        power = field::mul(power, x);
    }
    result
}

/// Degree `k - 1` polynomial hiding one secret byte in its constant term
///
/// Built for a single byte position and dropped (and wiped) right after its
/// evaluations are taken.
pub struct Polynomial {
    coefficients: Zeroizing<Vec<u8>>,
}

impl Polynomial {
    /// Creates a polynomial with constant term `secret` and `degree` fresh
    /// uniformly random higher coefficients
    pub fn random<R: RngCore + CryptoRng>(secret: u8, degree: usize, rng: &mut R) -> Self {
        let mut coefficients = Zeroizing::new(vec![0u8; degree + 1]);
        coefficients[0] = secret;
        rng.fill_bytes(&mut coefficients[1..]);
        Self { coefficients }
    }

    #[must_use]
    pub fn evaluate(&self, x: u8) -> u8 {
        evaluate(&self.coefficients, x)
    }

    #[must_use]
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }
}
