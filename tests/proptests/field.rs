//! Property tests for GF(256) arithmetic

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shardkey::field;

/// Wrapper for nonzero field elements
#[derive(Clone, Copy, Debug)]
struct NonZero(u8);

impl Arbitrary for NonZero {
    fn arbitrary(g: &mut Gen) -> Self {
        NonZero((u8::arbitrary(g) % 255) + 1) // 1..=255
    }
}

#[quickcheck]
fn prop_inverse(a: NonZero) -> bool {
    let NonZero(a) = a;
    field::mul(a, field::div(1, a).unwrap()) == 1
}

#[quickcheck]
fn prop_add_self_is_zero(a: u8) -> bool {
    field::add(a, a) == 0
}

#[quickcheck]
fn prop_mul_commutes(a: u8, b: u8) -> bool {
    field::mul(a, b) == field::mul(b, a)
}

#[quickcheck]
fn prop_div_undoes_mul(a: NonZero, b: NonZero) -> bool {
    let (NonZero(a), NonZero(b)) = (a, b);
    field::div(field::mul(a, b), b).unwrap() == a
}

#[quickcheck]
fn prop_mul_distributes_over_add(a: u8, b: u8, c: u8) -> bool {
    field::mul(a, field::add(b, c)) == field::add(field::mul(a, b), field::mul(a, c))
}

#[quickcheck]
fn prop_mul_associates(a: u8, b: u8, c: u8) -> bool {
    field::mul(field::mul(a, b), c) == field::mul(a, field::mul(b, c))
}
