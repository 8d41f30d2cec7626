//! Text encoding of shares
//!
//! A share travels as `"<x>:<base64(data)>"`: the decimal x-coordinate, a
//! colon, and the share bytes in standard, padded base64.
//!
//! ```rust
//! use shardkey::codec::{decode_share, encode_share};
//! use shardkey::domain::ShareIndex;
//! use shardkey::sharing::Share;
//!
//! # fn main() -> Result<(), shardkey::Error> {
//! let share = Share::new(ShareIndex::new(2)?, vec![0xDE, 0xAD, 0xBE, 0xEF]);
//! let text = encode_share(&share);
//! assert_eq!(text, "2:3q2+7w==");
//!
//! let decoded = decode_share(&text)?;
//! assert_eq!(decoded, share);
//! # Ok(())
//! # }
//! ```
//!
//! The CLI prints shares as labelled lines (`Share 1: 1:...`);
//! [`parse_share_line`] accepts either form.

use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zeroize::Zeroizing;

use crate::domain::ShareIndex;
use crate::error::{Error, Result, ShareDecodeError};
use crate::sharing::Share;

/// Separator between the x-coordinate and the payload
pub const SEPARATOR: char = ':';

/// Label prefix of the lines written by `split`
pub const LINE_LABEL: &str = "Share ";

/// Encodes a share as `"<x>:<base64>"`
#[must_use]
pub fn encode_share(share: &Share) -> String {
    format!("{}{SEPARATOR}{}", share.index(), STANDARD.encode(share.data()))
}

/// Decodes a `"<x>:<base64>"` share string
///
/// Only the first colon separates; the payload is never allowed to contain
/// one anyway since it is not in the base64 alphabet.
///
/// # Errors
/// Returns [`Error::ShareDecode`] if the colon is missing, the x-coordinate is
/// not a decimal integer in 1..=255, or the payload is not valid base64
pub fn decode_share(encoded: &str) -> Result<Share> {
    let (index, payload) = encoded
        .split_once(SEPARATOR)
        .ok_or(ShareDecodeError::MissingSeparator)?;

    let index: u8 = index.parse().map_err(ShareDecodeError::InvalidIndex)?;
    let index = ShareIndex::new(index).map_err(|_| ShareDecodeError::ReservedIndex)?;

    let data = STANDARD
        .decode(payload)
        .map_err(ShareDecodeError::InvalidPayload)?;

    Ok(Share::new(index, data))
}

/// Decodes one line of share input
///
/// Surrounding whitespace and a leading `Share N:` label are ignored.
///
/// # Errors
/// Returns [`Error::ShareDecode`] if what remains is not a valid share
pub fn parse_share_line(line: &str) -> Result<Share> {
    let line = line.trim();
    let share = strip_label(line).unwrap_or(line);
    decode_share(share.trim())
}

/// `"Share 3: 3:abc="` -> `" 3:abc="`
fn strip_label(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(LINE_LABEL)?;
    let (number, share) = rest.split_once(SEPARATOR)?;
    number.trim().parse::<usize>().ok()?;
    Some(share)
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = Zeroizing::new(encode_share(self));
        f.write_str(&encoded)
    }
}

impl FromStr for Share {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_share(s)
    }
}
