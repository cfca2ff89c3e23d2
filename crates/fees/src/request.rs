//! Validated withdrawal fee request

use groupsave_core::Amount;
use rust_decimal::Decimal;

use crate::error::FeeResult;

/// A withdrawal the member is about to submit.
///
/// The amount is checked on construction. The tier is kept as the raw code
/// the form produced; the calculator resolves it against its schedule
/// (lenient or strict, see `FeeSchedule::strict_tiers`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalFeeRequest {
    amount: Amount,
    is_early_withdrawal: bool,
    tier_code: String,
}

impl WithdrawalFeeRequest {
    /// Returns `FeeError::InvalidAmount` if `amount` is not positive.
    pub fn new(amount: Decimal, is_early_withdrawal: bool, tier_code: impl Into<String>) -> FeeResult<Self> {
        Ok(Self {
            amount: Amount::new(amount)?,
            is_early_withdrawal,
            tier_code: tier_code.into(),
        })
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn is_early_withdrawal(&self) -> bool {
        self.is_early_withdrawal
    }

    pub fn tier_code(&self) -> &str {
        &self.tier_code
    }
}
