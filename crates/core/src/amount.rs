//! Amount - Strictly positive decimal wrapper for fee inputs
//!
//! Contribution and withdrawal amounts entered by a member MUST be greater
//! than zero before they are priced. The fee calculators themselves accept any
//! `Decimal`; `Amount` is what the validating paths hand them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A strictly positive decimal amount.
///
/// # Invariant
/// The inner value is always > 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use groupsave_core::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
///
/// // Zero and negative amounts are rejected
/// assert!(Amount::new(Decimal::ZERO).is_err());
/// assert!(Amount::new(Decimal::new(-100, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create a new Amount from a Decimal.
    ///
    /// Returns `CoreError::InvalidAmount` if the value is zero or negative.
    pub fn new(value: Decimal) -> CoreResult<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidAmount(value))
        }
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
