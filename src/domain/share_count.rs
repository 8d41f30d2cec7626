//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::{ParameterError, Result};

/// Number of shares to create (1..=255)
///
/// Each share needs its own nonzero x-coordinate, and GF(256) only has 255 of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count
    pub const MAX: u8 = 255;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0 or exceeds 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardkey::domain::ShareCount;
    ///
    /// let count = ShareCount::new(3).unwrap();
    /// assert_eq!(*count, 3);
    ///
    /// let max_count = ShareCount::new(255).unwrap();
    /// assert_eq!(*max_count, ShareCount::MAX);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(256).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        match u8::try_from(value) {
            Ok(count) if count >= Self::MIN => Ok(Self(count)),
            _ => Err(ParameterError::ShareCountOutOfRange { share_count: value }.into()),
        }
    }

    pub(super) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
