//! Arithmetic over GF(2^8)
//!
//! Elements are plain `u8` values. The field is defined by the irreducible
//! polynomial x^8 + x^4 + x^3 + x^2 + 1 (`0x11D`), for which `2` generates the
//! multiplicative group. Multiplication and division go through exp/log
//! tables built once on first use and shared read-only for the lifetime of
//! the process.
//!
//! ```rust
//! use shardkey::field;
//!
//! let a = 0x53;
//! let b = 0xCA;
//! let product = field::mul(a, b);
//! assert_eq!(field::div(product, b).unwrap(), a);
//! assert_eq!(field::add(a, a), 0);
//! ```

use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Irreducible polynomial x^8 + x^4 + x^3 + x^2 + 1
pub const IRREDUCIBLE_POLY: u16 = 0x11D;

/// Order of the multiplicative group
const GROUP_ORDER: usize = 255;

struct Tables {
    /// `exp[i]` = 2^i, with `exp[255]` wrapping back to `exp[0]`
    exp: [u8; 256],
    /// `log[g]` = i such that 2^i = g; `log[0]` is unused
    log: [u8; 256],
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

impl Tables {
    fn build() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut g: u16 = 1;
        for i in 0..GROUP_ORDER {
            #[allow(clippy::cast_possible_truncation)]
            let element = g as u8;
            #[allow(clippy::cast_possible_truncation)]
            let exponent = i as u8;
            exp[i] = element;
            log[usize::from(element)] = exponent;
            g <<= 1;
            if g & 0x100 != 0 {
                g ^= IRREDUCIBLE_POLY;
            }
        }
        exp[GROUP_ORDER] = exp[0];

        Self { exp, log }
    }
}

/// Adds two field elements (XOR). Addition and subtraction coincide.
#[inline]
#[must_use]
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies two field elements
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let tables = &*TABLES;
    let log_sum = (usize::from(tables.log[a as usize]) + usize::from(tables.log[b as usize]))
        % GROUP_ORDER;
    tables.exp[log_sum]
}

/// Divides `a` by `b`
///
/// # Errors
/// Returns [`Error::DivisionByZero`] if `b` is zero
pub fn div(a: u8, b: u8) -> Result<u8> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let tables = &*TABLES;
    let log_diff = (GROUP_ORDER + usize::from(tables.log[a as usize])
        - usize::from(tables.log[b as usize]))
        % GROUP_ORDER;
    Ok(tables.exp[log_diff])
}

/// Multiplicative inverse of `a`
///
/// # Errors
/// Returns [`Error::DivisionByZero`] if `a` is zero
pub fn inv(a: u8) -> Result<u8> {
    div(1, a)
}
