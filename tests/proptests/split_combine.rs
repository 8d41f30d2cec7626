//! Property tests for split/combine workflows

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shardkey::commands::{combine_shares, split_secret};
use shardkey::domain::SplitConfig;
use shardkey::field;
use shardkey::polynomial;
use shardkey::sharing::{combine, split};

/// Wrapper for non-empty secrets
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut bytes = Vec::<u8>::arbitrary(g);
        if bytes.is_empty() {
            bytes.push(u8::arbitrary(g));
        }
        Secret(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|bytes| !bytes.is_empty())
                .map(Secret),
        )
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: usize,
    num_shares: usize,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Generate share count between 2 and 20 (keep it reasonable for testing)
        let num_shares = usize::from(u8::arbitrary(g) % 19) + 2; // 2..=20

        // Generate threshold between 2 and num_shares
        let threshold = usize::from(u8::arbitrary(g)) % (num_shares - 1) + 2; // 2..=num_shares

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

/// Every pair of the three shares recovers the secret
#[quickcheck]
fn prop_any_two_of_three_recover(secret: Secret) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, SplitConfig::default()) else {
        return false;
    };

    [(0, 1), (0, 2), (1, 2)].iter().all(|&(a, b)| {
        matches!(
            combine(&[shares[a].clone(), shares[b].clone()]),
            Ok(recovered) if *recovered == secret
        )
    })
}

/// All three shares together also recover the secret
#[quickcheck]
fn prop_all_three_recover(secret: Secret) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, SplitConfig::default()) else {
        return false;
    };

    matches!(combine(&shares), Ok(recovered) if *recovered == secret)
}

/// Exactly `threshold` shares recover the secret for general parameters
#[quickcheck]
fn prop_threshold_shares_recover(secret: Secret, params: ValidShamirParams) -> bool {
    let Secret(secret) = secret;
    let Ok(config) = SplitConfig::from_counts(params.num_shares, params.threshold) else {
        return false;
    };
    let Ok(shares) = split(&secret, config) else {
        return false;
    };
    if shares.len() != params.num_shares {
        return false;
    }

    // Select the last threshold shares
    let selected = &shares[params.num_shares - params.threshold..];

    matches!(combine(selected), Ok(recovered) if *recovered == secret)
}

/// Encoded shares survive the text round trip and still recover the secret
#[quickcheck]
fn prop_encoded_round_trip(secret: Secret, first: u8, second: u8) -> bool {
    let Secret(secret) = secret;
    let a = usize::from(first % 3);
    let b = (a + 1 + usize::from(second % 2)) % 3;

    let Ok(encoded) = split_secret(&secret, SplitConfig::default()) else {
        return false;
    };
    let selected = [encoded[a].as_str(), encoded[b].as_str()];

    matches!(combine_shares(&selected), Ok(recovered) if *recovered == secret)
}

/// A single share byte is consistent with every secret byte: for each
/// candidate there is a coefficient reproducing the observed value
#[quickcheck]
fn prop_single_share_secrecy(secret: Secret, which: u8) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, SplitConfig::default()) else {
        return false;
    };
    let share = &shares[usize::from(which % 3)];
    let x = *share.index();

    share.data().iter().all(|&y| {
        (0..=255u8).all(|candidate| {
            // c = (y - candidate) / x
            let Ok(c) = field::div(field::add(y, candidate), x) else {
                return false;
            };
            polynomial::evaluate(&[candidate, c], x) == y
        })
    })
}

/// Share bytes at x = 1 are `secret + c`; recovering `c` for each byte shows
/// coefficients are not reused across positions
#[quickcheck]
fn prop_coefficients_fresh_per_byte(byte: u8) -> bool {
    let secret = vec![byte; 64];
    let Ok(shares) = split(&secret, SplitConfig::default()) else {
        return false;
    };

    let coefficients: Vec<u8> = shares[0]
        .data()
        .iter()
        .zip(&secret)
        .map(|(&y, &s)| field::add(y, s))
        .collect();

    // 64 draws from 256 values all equal has probability 2^-504
    coefficients.iter().any(|&c| c != coefficients[0])
}
