//! Quote error types

use groupsave_fees::FeeError;
use thiserror::Error;

/// Errors from previewing or confirming a fee quote
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The request was rejected before or by the fee service
    #[error("Validation failed: {0}")]
    Validation(#[from] FeeError),

    /// The fee service could not be reached
    #[error("Fee service unavailable: {0}")]
    Unavailable(String),

    /// The fee service answered with something unusable
    #[error("Invalid response from fee service: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

impl QuoteError {
    /// True when retrying later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuoteError::Unavailable(_))
    }
}
