//! Configuration validation for Shamir Secret Sharing splits

use super::{ShareCount, ShareIndex, Threshold};
use crate::error::{ParameterError, Result};

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shares are required
/// than actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardkey::domain::{SplitConfig, Threshold, ShareCount};
    ///
    /// let config = SplitConfig::new(
    ///     Threshold::new(2).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 2);
    /// assert_eq!(*config.share_count(), 3);
    ///
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(ParameterError::ThresholdExceedsShareCount {
                threshold: usize::from(*threshold),
                share_count: usize::from(*share_count),
            }
            .into());
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Validates raw counts in the order: threshold vs. count, minimum
    /// threshold, field capacity
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidParameters`] describing the first violated rule
    pub fn from_counts(share_count: usize, threshold: usize) -> Result<Self> {
        if threshold > share_count {
            return Err(ParameterError::ThresholdExceedsShareCount {
                threshold,
                share_count,
            }
            .into());
        }
        if threshold < usize::from(Threshold::MIN) {
            return Err(ParameterError::ThresholdTooSmall { threshold }.into());
        }
        let share_count = ShareCount::new(share_count)?;
        let threshold = Threshold::new(threshold)?;
        Self::new(threshold, share_count)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// X-coordinates handed out by a split: 1, 2, ..., `share_count`
    pub fn indices(&self) -> impl Iterator<Item = ShareIndex> {
        (ShareIndex::MIN..=*self.share_count).filter_map(|x| ShareIndex::new(x).ok())
    }
}

impl Default for SplitConfig {
    /// The 2-of-3 scheme
    fn default() -> Self {
        Self {
            threshold: Threshold::new_unchecked(2),
            share_count: ShareCount::new_unchecked(3),
        }
    }
}
