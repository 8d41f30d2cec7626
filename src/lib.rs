// Internal library for testing purposes
// Not intended for external use as a library

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod format;
pub mod polynomial;
pub mod sharing;

pub use error::{Error, ParameterError, Result, ShareDecodeError};
