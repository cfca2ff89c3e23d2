//! Fee engine errors

use groupsave_core::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the validating fee paths and schedule loading
///
/// The core calculations never return these; they are total.
#[derive(Debug, Error)]
pub enum FeeError {
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(Decimal),

    #[error("Unknown processing tier: {0}")]
    UnknownTier(String),

    #[error("Invalid fee schedule: {0}")]
    InvalidSchedule(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type for fee operations
pub type FeeResult<T> = Result<T, FeeError>;

impl From<CoreError> for FeeError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidAmount(value) => FeeError::InvalidAmount(value),
            CoreError::UnknownTier(code) => FeeError::UnknownTier(code),
        }
    }
}

impl FeeError {
    /// Check if the error was caused by user input (amount or tier)
    pub fn is_validation_error(&self) -> bool {
        matches!(self, FeeError::InvalidAmount(_) | FeeError::UnknownTier(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_core_error_conversion() {
        let err: FeeError = CoreError::InvalidAmount(dec!(0)).into();
        assert!(matches!(err, FeeError::InvalidAmount(v) if v == dec!(0)));

        let err: FeeError = CoreError::UnknownTier("FAST".into()).into();
        assert!(matches!(err, FeeError::UnknownTier(ref c) if c == "FAST"));
    }

    #[test]
    fn test_validation_classification() {
        assert!(FeeError::InvalidAmount(dec!(-1)).is_validation_error());
        assert!(FeeError::UnknownTier("X".into()).is_validation_error());
        assert!(!FeeError::InvalidSchedule("bad".into()).is_validation_error());
    }

    #[test]
    fn test_error_display() {
        let err = FeeError::InvalidAmount(dec!(-20));
        assert_eq!(err.to_string(), "Invalid amount: -20 (must be greater than zero)");
    }
}
