//! Error types for splitting, combining and encoding shares

use std::num::ParseIntError;

use thiserror::Error;

/// Result alias used throughout the core modules
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised by the secret sharing core
///
/// Every variant is a local validation failure. None of them are retryable:
/// calling again with the same input reproduces the same error.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad threshold/share-count combination or empty secret
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// Division by the zero element of GF(256)
    #[error("division by zero in GF(256)")]
    DivisionByZero,

    /// Fewer than two shares were supplied to combine
    #[error("insufficient shares: need at least 2, but only {provided} provided")]
    InsufficientShares { provided: usize },

    /// Shares of differing lengths were supplied to combine
    #[error("share length mismatch: found {expected} and {found} bytes")]
    ShareLengthMismatch { expected: usize, found: usize },

    /// Two supplied shares carry the same x-coordinate
    #[error("duplicate share: x-coordinate {index} appears more than once")]
    DuplicateShare { index: u8 },

    /// Malformed share text
    #[error("failed to decode share: {0}")]
    ShareDecode(#[from] ShareDecodeError),

    /// Secret text that does not match its declared format
    #[error("invalid {format} secret: {reason}")]
    InvalidSecretEncoding {
        format: &'static str,
        reason: String,
    },
}

/// Reasons a split configuration or share is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("secret cannot be empty")]
    EmptySecret,

    /// A threshold of 0 or 1 would let a single share reveal the secret
    #[error("threshold must be at least 2 (got {threshold})")]
    ThresholdTooSmall { threshold: usize },

    /// No split has more than 255 shares to meet a larger threshold
    #[error("threshold must be at most 255 (got {threshold})")]
    ThresholdOutOfRange { threshold: usize },

    #[error("threshold {threshold} cannot exceed share count {share_count}")]
    ThresholdExceedsShareCount {
        threshold: usize,
        share_count: usize,
    },

    /// Only the 255 nonzero field elements are usable as x-coordinates
    #[error("share count must be between 1 and 255 (got {share_count})")]
    ShareCountOutOfRange { share_count: usize },

    #[error("x-coordinate 0 is reserved for the secret")]
    ReservedShareIndex,
}

/// Reasons a `"<x>:<base64>"` share string fails to decode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareDecodeError {
    #[error("missing ':' separator")]
    MissingSeparator,

    #[error("invalid x-coordinate: {0}")]
    InvalidIndex(#[source] ParseIntError),

    #[error("x-coordinate 0 is reserved for the secret")]
    ReservedIndex,

    #[error("invalid base64 payload: {0}")]
    InvalidPayload(#[source] base64::DecodeError),
}
