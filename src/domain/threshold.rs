//! Threshold newtype for Shamir Secret Sharing

use crate::error::{ParameterError, Result};

/// Threshold for Shamir Secret Sharing (2..=255)
///
/// Invariant: threshold >= 2 (enforced at construction)
/// A threshold of 1 provides no security benefit since any single share can recover the entire secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Smallest threshold that still hides the secret
    pub const MIN: u8 = 2;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the threshold is less than 2 or larger than 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardkey::domain::Threshold;
    ///
    /// let threshold = Threshold::new(2).unwrap();
    /// assert_eq!(*threshold, 2);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// assert!(Threshold::new(256).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < usize::from(Self::MIN) {
            return Err(ParameterError::ThresholdTooSmall { threshold: value }.into());
        }
        let value = u8::try_from(value)
            .map_err(|_| ParameterError::ThresholdOutOfRange { threshold: value })?;
        Ok(Self(value))
    }

    pub(super) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
