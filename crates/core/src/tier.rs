//! FeeTier - Withdrawal processing-time tiers
//!
//! A withdrawal is paid out on one of four schedules. The faster the payout,
//! the larger the processing surcharge (see `groupsave_fees::FeeSchedule`).
//!
//! Parsing comes in two flavours:
//! - `FromStr` is strict and rejects unknown codes. Codes are matched exactly,
//!   so `"instant"` or `" DAYS_14 "` are unknown.
//! - `from_code_or_default` / `From<&str>` fall back to `Days30`, the cheapest
//!   tier. Forms and server payloads go through this path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Processing-time tier for a withdrawal
///
/// # Examples
/// ```
/// use groupsave_core::FeeTier;
///
/// let tier: FeeTier = "DAYS_7".parse().unwrap();
/// assert_eq!(tier, FeeTier::Days7);
/// assert_eq!(tier.to_string(), "DAYS_7");
///
/// // Unknown codes fall back to the 30-day tier on the lenient path
/// assert_eq!(FeeTier::from_code_or_default("NEXT_WEEK"), FeeTier::Days30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeeTier {
    /// Paid out immediately
    Instant,
    /// Paid out within 7 days
    Days7,
    /// Paid out within 14 days
    Days14,
    /// Paid out within 30 days
    #[default]
    Days30,
}

impl FeeTier {
    /// All tiers, fastest first
    pub const ALL: [FeeTier; 4] = [
        FeeTier::Instant,
        FeeTier::Days7,
        FeeTier::Days14,
        FeeTier::Days30,
    ];

    /// Returns the wire code for this tier
    pub fn code(&self) -> &'static str {
        match self {
            FeeTier::Instant => "INSTANT",
            FeeTier::Days7 => "DAYS_7",
            FeeTier::Days14 => "DAYS_14",
            FeeTier::Days30 => "DAYS_30",
        }
    }

    /// Maximum payout delay in days (0 for instant)
    pub fn payout_days(&self) -> u32 {
        match self {
            FeeTier::Instant => 0,
            FeeTier::Days7 => 7,
            FeeTier::Days14 => 14,
            FeeTier::Days30 => 30,
        }
    }

    /// Parse a tier code, falling back to `Days30` for anything unrecognized.
    pub fn from_code_or_default(code: &str) -> Self {
        match code.parse() {
            Ok(tier) => tier,
            Err(_) => {
                tracing::debug!(code, fallback = "DAYS_30", "Unrecognized processing tier");
                FeeTier::Days30
            }
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for FeeTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INSTANT" => Ok(FeeTier::Instant),
            "DAYS_7" => Ok(FeeTier::Days7),
            "DAYS_14" => Ok(FeeTier::Days14),
            "DAYS_30" => Ok(FeeTier::Days30),
            _ => Err(CoreError::UnknownTier(s.to_string())),
        }
    }
}

impl From<&str> for FeeTier {
    fn from(s: &str) -> Self {
        Self::from_code_or_default(s)
    }
}

impl From<String> for FeeTier {
    fn from(s: String) -> Self {
        Self::from_code_or_default(&s)
    }
}

impl From<FeeTier> for String {
    fn from(tier: FeeTier) -> Self {
        tier.code().to_string()
    }
}
