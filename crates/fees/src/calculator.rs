//! Fee calculators
//!
//! `FeeCalculator` is the capability both the on-device preview and the
//! server mirror depend on. `StandardFeeCalculator` is its only
//! implementation; the arithmetic lives here and nowhere else.
//!
//! The calculations are total: they never fail and never panic, whatever the
//! input. Non-positive amounts produce meaningless (negative or zero) figures.
//! Callers that need validation use `quote_withdrawal` / `quote_service_fee`.

use groupsave_core::{Amount, FeeTier};
use rust_decimal::Decimal;

use crate::error::FeeResult;
use crate::request::WithdrawalFeeRequest;
use crate::result::{ContributionFeeResult, FeeBreakdown, WithdrawalFeeResult};
use crate::schedule::FeeSchedule;

/// Fee calculation capability
pub trait FeeCalculator: Send + Sync {
    /// The percentages this calculator applies
    fn schedule(&self) -> &FeeSchedule;

    /// Withdrawal fee for a known tier
    fn withdrawal_fee(&self, amount: Decimal, is_early_withdrawal: bool, tier: FeeTier)
        -> WithdrawalFeeResult;

    /// Service fee surcharged on a contribution
    fn service_fee(&self, amount: Decimal) -> ContributionFeeResult;

    /// Withdrawal fee for a raw tier code; unrecognized codes are priced as DAYS_30
    fn withdrawal_fee_for_code(
        &self,
        amount: Decimal,
        is_early_withdrawal: bool,
        tier_code: &str,
    ) -> WithdrawalFeeResult {
        self.withdrawal_fee(amount, is_early_withdrawal, FeeTier::from_code_or_default(tier_code))
    }

    /// Resolve a tier code according to `FeeSchedule::strict_tiers`
    fn resolve_tier(&self, tier_code: &str) -> FeeResult<FeeTier> {
        if self.schedule().strict_tiers {
            Ok(tier_code.parse::<FeeTier>()?)
        } else {
            Ok(FeeTier::from_code_or_default(tier_code))
        }
    }

    /// Validating withdrawal quote
    fn quote_withdrawal(&self, request: &WithdrawalFeeRequest) -> FeeResult<WithdrawalFeeResult> {
        let tier = self.resolve_tier(request.tier_code())?;
        Ok(self.withdrawal_fee(request.amount().value(), request.is_early_withdrawal(), tier))
    }

    /// Validating service fee quote; rejects non-positive amounts
    fn quote_service_fee(&self, amount: Decimal) -> FeeResult<ContributionFeeResult> {
        let amount = Amount::new(amount)?;
        Ok(self.service_fee(amount.value()))
    }
}

/// Percentage-based fee calculator driven by a `FeeSchedule`
#[derive(Debug, Clone, Default)]
pub struct StandardFeeCalculator {
    schedule: FeeSchedule,
}

impl StandardFeeCalculator {
    /// Create a calculator with the published rates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom schedule (validated)
    pub fn with_schedule(schedule: FeeSchedule) -> FeeResult<Self> {
        schedule.validate()?;
        Ok(Self { schedule })
    }
}

impl FeeCalculator for StandardFeeCalculator {
    fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    fn withdrawal_fee(
        &self,
        amount: Decimal,
        is_early_withdrawal: bool,
        tier: FeeTier,
    ) -> WithdrawalFeeResult {
        let early_pct = if is_early_withdrawal {
            self.schedule.early_withdrawal_pct
        } else {
            Decimal::ZERO
        };
        let fee_percentage = early_pct.saturating_add(self.schedule.tier_pct(tier));

        let fee_amount = percent_of(amount, fee_percentage);
        let early_withdrawal_fee = percent_of(amount, early_pct);

        WithdrawalFeeResult {
            original_amount: amount,
            fee_percentage,
            fee_amount,
            net_amount: amount.saturating_sub(fee_amount),
            fee_breakdown: FeeBreakdown {
                early_withdrawal_fee,
                // Derived, not recomputed, so the two parts always sum to fee_amount
                processing_time_fee: fee_amount.saturating_sub(early_withdrawal_fee),
            },
        }
    }

    fn service_fee(&self, amount: Decimal) -> ContributionFeeResult {
        let fee_percentage = self.schedule.service_fee_pct;
        let fee_amount = percent_of(amount, fee_percentage);

        ContributionFeeResult {
            contribution_amount: amount,
            fee_percentage,
            fee_amount,
            total_charge_amount: amount.saturating_add(fee_amount),
        }
    }
}

/// `amount * pct / 100`
///
/// Divides first only when `amount * pct` would overflow; the schedule caps
/// `pct` at 100, so the scaled-down product always fits.
fn percent_of(amount: Decimal, pct: Decimal) -> Decimal {
    match amount.checked_mul(pct) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => (amount / Decimal::ONE_HUNDRED).saturating_mul(pct),
    }
}

/// Withdrawal fee at the published rates.
///
/// Unrecognized `processing_tier` codes are priced as DAYS_30.
pub fn calculate_withdrawal_fee(
    amount: Decimal,
    is_early_withdrawal: bool,
    processing_tier: &str,
) -> WithdrawalFeeResult {
    StandardFeeCalculator::new().withdrawal_fee_for_code(amount, is_early_withdrawal, processing_tier)
}

/// Contribution service fee at the published rate
pub fn calculate_service_fee(amount: Decimal) -> ContributionFeeResult {
    StandardFeeCalculator::new().service_fee(amount)
}
