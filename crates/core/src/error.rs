//! Library error model.

use thiserror::Error;

/// Result type for fallible `Money` construction.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Error raised when an amount cannot be turned into [`crate::Money`].
///
/// Keep this focused on construction/parse failures. Domain rule failures
/// (insufficient funds, withdrawal limits) are deliberately **not** errors;
/// the account operations signal them with a boolean return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The textual amount failed to parse as a decimal.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl MoneyError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }
}
