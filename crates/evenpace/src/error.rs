//! Error types used across the crate.

use thiserror::Error;

/// Errors produced by the resampling pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller-supplied argument violated a precondition. The message names
    /// the offending value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
