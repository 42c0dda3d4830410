//! Shared error types.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Every failure is a recoverable, user-correctable input mistake; there is
/// no fatal path. Callers embedding the calculators behind a form should
/// catch per calculation block so one bad field does not block the others.
#[derive(Debug, Error)]
pub enum ElectrostaticsError {
    /// Raised when a calculator input violates its documented range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ElectrostaticsError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
