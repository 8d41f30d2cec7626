//! `ShareIndex` newtype for Shamir Secret Sharing

use crate::error::{ParameterError, Result};

/// Share x-coordinate (1..=255)
///
/// The polynomial evaluated at 0 is the secret itself, so 0 is never handed
/// out as a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Smallest valid x-coordinate
    pub const MIN: u8 = 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardkey::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// assert!(ShareIndex::new(255).is_ok());
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 {
            return Err(ParameterError::ReservedShareIndex.into());
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
