//! Property tests for share text encoding/decoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shardkey::codec::{decode_share, encode_share, parse_share_line};
use shardkey::domain::ShareIndex;
use shardkey::sharing::Share;

/// Wrapper for arbitrary shares with a valid x-coordinate
#[derive(Clone, Debug)]
struct ArbitraryShare(Share);

impl Arbitrary for ArbitraryShare {
    fn arbitrary(g: &mut Gen) -> Self {
        let index = (u8::arbitrary(g) % 255) + 1;
        let data = Vec::<u8>::arbitrary(g);
        ArbitraryShare(Share::new(ShareIndex::new(index).unwrap(), data))
    }
}

/// Encoded shares must decode to exactly the same share
#[quickcheck]
fn prop_share_text_round_trip(share: ArbitraryShare) -> bool {
    let ArbitraryShare(share) = share;
    let encoded = encode_share(&share);

    // Decimal x, a single colon, then base64 (which never contains ':')
    let Some((index, payload)) = encoded.split_once(':') else {
        return false;
    };
    if index != share.index().to_string() || payload.contains(':') {
        return false;
    }

    matches!(decode_share(&encoded), Ok(decoded) if decoded == share)
}

/// Labelled lines as written by split decode to the same share
#[quickcheck]
fn prop_labelled_line_round_trip(share: ArbitraryShare, label: u8) -> bool {
    let ArbitraryShare(share) = share;
    let line = format!("Share {label}: {}", encode_share(&share));

    matches!(parse_share_line(&line), Ok(decoded) if decoded == share)
}

/// Strings without a colon never decode
#[quickcheck]
fn prop_missing_separator_rejected(text: String) -> bool {
    if text.contains(':') {
        return true;
    }
    decode_share(&text).is_err()
}
