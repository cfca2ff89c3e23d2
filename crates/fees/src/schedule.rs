//! Fee schedule with configurable percentages
//!
//! Defaults reproduce the product's published rates. A JSON file may override
//! any subset of fields; missing fields keep their defaults.

use groupsave_core::FeeTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FeeError, FeeResult};

/// Early withdrawal surcharge (20%)
pub const EARLY_WITHDRAWAL_PCT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
/// INSTANT processing surcharge (20%)
pub const INSTANT_PCT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
/// DAYS_7 processing surcharge (15%)
pub const DAYS_7_PCT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
/// DAYS_14 processing surcharge (10%)
pub const DAYS_14_PCT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
/// DAYS_30 processing surcharge, also the fallback (5%)
pub const DAYS_30_PCT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
/// Contribution service fee (10%)
pub const SERVICE_FEE_PCT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

const MAX_PCT: Decimal = Decimal::ONE_HUNDRED;

/// Percentages (0-100) used by the fee calculators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Surcharge added when withdrawing before the group's maturity date
    #[serde(default = "default_early_withdrawal_pct")]
    pub early_withdrawal_pct: Decimal,

    // === Processing-time surcharges ===
    #[serde(default = "default_instant_pct")]
    pub instant_pct: Decimal,

    #[serde(default = "default_days_7_pct")]
    pub days_7_pct: Decimal,

    #[serde(default = "default_days_14_pct")]
    pub days_14_pct: Decimal,

    #[serde(default = "default_days_30_pct")]
    pub days_30_pct: Decimal,

    /// Service fee charged on top of each contribution
    #[serde(default = "default_service_fee_pct")]
    pub service_fee_pct: Decimal,

    /// Reject unknown tier codes on the validating path instead of
    /// pricing them as DAYS_30
    #[serde(default)]
    pub strict_tiers: bool,
}

fn default_early_withdrawal_pct() -> Decimal {
    EARLY_WITHDRAWAL_PCT
}

fn default_instant_pct() -> Decimal {
    INSTANT_PCT
}

fn default_days_7_pct() -> Decimal {
    DAYS_7_PCT
}

fn default_days_14_pct() -> Decimal {
    DAYS_14_PCT
}

fn default_days_30_pct() -> Decimal {
    DAYS_30_PCT
}

fn default_service_fee_pct() -> Decimal {
    SERVICE_FEE_PCT
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            early_withdrawal_pct: default_early_withdrawal_pct(),
            instant_pct: default_instant_pct(),
            days_7_pct: default_days_7_pct(),
            days_14_pct: default_days_14_pct(),
            days_30_pct: default_days_30_pct(),
            service_fee_pct: default_service_fee_pct(),
            strict_tiers: false,
        }
    }
}

impl FeeSchedule {
    /// Load a schedule from a JSON file and validate it
    pub fn from_file(path: &Path) -> FeeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let schedule: FeeSchedule = serde_json::from_str(&content)?;
        schedule.validate()?;

        if schedule != FeeSchedule::default() {
            tracing::warn!(
                path = %path.display(),
                "Fee schedule differs from published rates; server quotes may disagree"
            );
        }

        Ok(schedule)
    }

    /// Processing surcharge for a tier
    pub fn tier_pct(&self, tier: FeeTier) -> Decimal {
        match tier {
            FeeTier::Instant => self.instant_pct,
            FeeTier::Days7 => self.days_7_pct,
            FeeTier::Days14 => self.days_14_pct,
            FeeTier::Days30 => self.days_30_pct,
        }
    }

    /// Check that every percentage is within 0-100 and that no withdrawal
    /// can be charged more than its full amount.
    pub fn validate(&self) -> FeeResult<()> {
        let fields = [
            ("early_withdrawal_pct", self.early_withdrawal_pct),
            ("instant_pct", self.instant_pct),
            ("days_7_pct", self.days_7_pct),
            ("days_14_pct", self.days_14_pct),
            ("days_30_pct", self.days_30_pct),
            ("service_fee_pct", self.service_fee_pct),
        ];

        for (name, pct) in fields {
            if pct < Decimal::ZERO || pct > MAX_PCT {
                return Err(FeeError::InvalidSchedule(format!(
                    "{} must be between 0 and 100, got {}",
                    name, pct
                )));
            }
        }

        let max_tier = FeeTier::ALL
            .iter()
            .map(|tier| self.tier_pct(*tier))
            .max()
            .unwrap_or(Decimal::ZERO);
        let worst_case = self.early_withdrawal_pct + max_tier;
        if worst_case > MAX_PCT {
            return Err(FeeError::InvalidSchedule(format!(
                "early withdrawal + highest tier surcharge exceeds 100% ({}%)",
                worst_case
            )));
        }

        Ok(())
    }
}
