//! Splitting a secret into shares and combining shares back into the secret
//!
//! Each byte of the secret is hidden in the constant term of its own random
//! polynomial of degree `threshold - 1`. Share `x` holds that polynomial
//! evaluated at `x` for every byte position. Any `threshold` shares determine
//! the polynomials, and Lagrange interpolation at 0 gives the secret back.
//!
//! ```rust
//! use shardkey::domain::SplitConfig;
//! use shardkey::sharing::{combine, split};
//!
//! # fn main() -> Result<(), shardkey::Error> {
//! let shares = split(b"correct horse", SplitConfig::default())?;
//! assert_eq!(shares.len(), 3);
//!
//! let recovered = combine(&[shares[0].clone(), shares[2].clone()])?;
//! assert_eq!(recovered.as_slice(), b"correct horse");
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::{ShareIndex, SplitConfig};
use crate::error::{Error, ParameterError, Result};
use crate::field;
use crate::polynomial::Polynomial;

/// One share: an x-coordinate and one polynomial evaluation per secret byte
#[derive(Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    data: Zeroizing<Vec<u8>>,
}

impl Share {
    #[must_use]
    pub fn new(index: ShareIndex, data: Vec<u8>) -> Self {
        Self {
            index,
            data: Zeroizing::new(data),
        }
    }

    /// The share's x-coordinate
    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Share bytes are secret material, keep them out of debug output
impl std::fmt::Debug for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Share")
            .field("index", &*self.index)
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

/// Splits `secret` using the operating system CSPRNG
///
/// # Errors
/// Returns [`Error::InvalidParameters`] if the secret is empty
pub fn split(secret: &[u8], config: SplitConfig) -> Result<Vec<Share>> {
    split_with_rng(secret, config, &mut OsRng)
}

/// Splits `secret` drawing polynomial coefficients from `rng`
///
/// Coefficients are drawn fresh for every byte position.
///
/// # Errors
/// Returns [`Error::InvalidParameters`] if the secret is empty
pub fn split_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    config: SplitConfig,
    rng: &mut R,
) -> Result<Vec<Share>> {
    if secret.is_empty() {
        return Err(ParameterError::EmptySecret.into());
    }

    let degree = usize::from(*config.threshold()) - 1;
    let indices: Vec<ShareIndex> = config.indices().collect();
    debug!(
        secret_len = secret.len(),
        threshold = *config.threshold(),
        share_count = indices.len(),
        "splitting secret"
    );

    let mut buffers: Vec<Vec<u8>> = indices
        .iter()
        .map(|_| Vec::with_capacity(secret.len()))
        .collect();

    for &byte in secret {
        let polynomial = Polynomial::random(byte, degree, rng);
        for (buffer, index) in buffers.iter_mut().zip(&indices) {
            buffer.push(polynomial.evaluate(**index));
        }
    }

    Ok(indices
        .into_iter()
        .zip(buffers)
        .map(|(index, data)| Share::new(index, data))
        .collect())
}

/// Recovers the secret from two or more shares of the same split
///
/// All supplied shares are used. Supplying fewer than the split's threshold
/// (but at least two) yields a wrong result rather than an error, since
/// shares do not record the threshold.
///
/// # Errors
/// - [`Error::InsufficientShares`] if fewer than two shares are given
/// - [`Error::ShareLengthMismatch`] if share lengths differ
/// - [`Error::DuplicateShare`] if two shares have the same x-coordinate
pub fn combine(shares: &[Share]) -> Result<Zeroizing<Vec<u8>>> {
    if shares.len() < 2 {
        return Err(Error::InsufficientShares {
            provided: shares.len(),
        });
    }

    let expected = shares[0].len();
    if let Some(share) = shares.iter().find(|share| share.len() != expected) {
        return Err(Error::ShareLengthMismatch {
            expected,
            found: share.len(),
        });
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.index()) {
            return Err(Error::DuplicateShare {
                index: *share.index(),
            });
        }
    }

    debug!(share_count = shares.len(), secret_len = expected, "combining shares");

    let xs: Vec<u8> = shares.iter().map(|share| *share.index()).collect();
    let mut ys = Zeroizing::new(vec![0u8; shares.len()]);
    let mut secret = Zeroizing::new(Vec::with_capacity(expected));

    for position in 0..expected {
        for (y, share) in ys.iter_mut().zip(shares) {
            *y = share.data()[position];
        }
        secret.push(interpolate_at_zero(&xs, &ys)?);
    }

    Ok(secret)
}

/// Lagrange interpolation of the points `(xs[i], ys[i])`, evaluated at 0
///
/// `f(0) = Σ y_i · Π_{j≠i} x_j / (x_i + x_j)`; in GF(256) subtraction is
/// addition, so `0 - x_j` is `x_j` and `x_i - x_j` is `x_i + x_j`.
///
/// # Errors
/// - [`Error::ShareLengthMismatch`] if `xs` and `ys` differ in length
/// - [`Error::InsufficientShares`] if fewer than two points are given
/// - [`Error::DivisionByZero`] if two x-coordinates coincide
pub fn interpolate_at_zero(xs: &[u8], ys: &[u8]) -> Result<u8> {
    if xs.len() != ys.len() {
        return Err(Error::ShareLengthMismatch {
            expected: xs.len(),
            found: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(Error::InsufficientShares { provided: xs.len() });
    }

    let mut result = 0;
    for (i, (&x_i, &y_i)) in xs.iter().zip(ys).enumerate() {
        let mut numerator = 1;
        let mut denominator = 1;
        for (j, &x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field::mul(numerator, x_j);
            denominator = field::mul(denominator, field::add(x_i, x_j));
        }
        let basis = field::div(numerator, denominator)?;
        result = field::add(result, field::mul(y_i, basis));
    }
    Ok(result)
}
