//! Core domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when validating user input into core types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Amount must be positive: {0}")]
    InvalidAmount(Decimal),

    #[error("Unknown processing tier: {0}")]
    UnknownTier(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
