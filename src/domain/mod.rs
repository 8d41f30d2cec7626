//! Domain types for Shamir Secret Sharing
//!
//! Validated newtypes for splitting and combining:
//! - [`Threshold`] - Minimum shares required for reconstruction (2..=255)
//! - [`ShareIndex`] - Share x-coordinate (1..=255, 0 is the secret itself)
//! - [`ShareCount`] - Total number of shares to create (1..=255)
//! - [`SplitConfig`] - Validated threshold and share count pair (default 2-of-3)

mod config;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
