//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// Keep this focused on deterministic boundary failures (a raw input that
/// cannot become a well-typed value). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// An item name failed validation (empty or whitespace-only input).
    #[error("invalid item name: {0}")]
    InvalidName(String),

    /// A quantity could not be interpreted as an integer.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl StockError {
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }
}
