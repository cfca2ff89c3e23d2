//! Fee results
//!
//! Field names and JSON shape match the backend's fee-calculation responses,
//! so a screen can render either a local estimate or a server-confirmed value.
//! Amounts are JSON numbers carrying every decimal digit, never an f64.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How a withdrawal fee splits between its two surcharges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub early_withdrawal_fee: Decimal,
    /// Always `fee_amount - early_withdrawal_fee`
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub processing_time_fee: Decimal,
}

/// Fee breakdown for a withdrawal request
///
/// # Invariants
/// - `fee_amount = original_amount * fee_percentage / 100`
/// - `net_amount = original_amount - fee_amount`
/// - `fee_breakdown.early_withdrawal_fee + fee_breakdown.processing_time_fee = fee_amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalFeeResult {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub original_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fee_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fee_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net_amount: Decimal,
    pub fee_breakdown: FeeBreakdown,
}

impl WithdrawalFeeResult {
    /// Check the amount and breakdown invariants.
    ///
    /// Does not check `fee_percentage`; a server response may round
    /// `fee_amount` differently than the local calculator.
    pub fn is_consistent(&self) -> bool {
        self.fee_amount + self.net_amount == self.original_amount
            && self.fee_breakdown.early_withdrawal_fee + self.fee_breakdown.processing_time_fee
                == self.fee_amount
    }

    /// Round for display to `dp` decimal places.
    ///
    /// Only the fee and the early-withdrawal portion are rounded; net amount
    /// and processing fee are re-derived so the result stays consistent.
    pub fn rounded(&self, dp: u32) -> Self {
        let fee_amount = round_money(self.fee_amount, dp);
        let early_withdrawal_fee = round_money(self.fee_breakdown.early_withdrawal_fee, dp);

        Self {
            original_amount: self.original_amount,
            fee_percentage: self.fee_percentage,
            fee_amount,
            net_amount: self.original_amount - fee_amount,
            fee_breakdown: FeeBreakdown {
                early_withdrawal_fee,
                processing_time_fee: fee_amount - early_withdrawal_fee,
            },
        }
    }
}

/// Service fee charged on top of a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionFeeResult {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub contribution_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fee_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fee_amount: Decimal,
    /// What the member is actually charged: contribution + fee
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_charge_amount: Decimal,
}

impl ContributionFeeResult {
    pub fn is_consistent(&self) -> bool {
        self.contribution_amount + self.fee_amount == self.total_charge_amount
    }

    /// Round the fee for display; the total is re-derived.
    pub fn rounded(&self, dp: u32) -> Self {
        let fee_amount = round_money(self.fee_amount, dp);
        Self {
            contribution_amount: self.contribution_amount,
            fee_percentage: self.fee_percentage,
            fee_amount,
            total_charge_amount: self.contribution_amount + fee_amount,
        }
    }
}

fn round_money(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
