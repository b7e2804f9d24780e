//! Error type shared by the GA engine and the regression module.

use thiserror::Error;

/// Errors raised when an operation is called with arguments that violate
/// its preconditions.
///
/// Every failure is detected synchronously at the offending call; there is
/// no retry path and no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GaError {
    /// A precondition on an argument or configuration field does not hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GaError::InvalidArgument(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
