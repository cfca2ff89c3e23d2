//! GroupSave Fee Engine
//!
//! Computes the fees shown to a member before they contribute to or withdraw
//! from a savings group:
//! - Withdrawal fee: early-withdrawal surcharge + processing-time surcharge
//! - Contribution service fee: flat percentage on top of the contribution
//!
//! `StandardFeeCalculator` is the one implementation of `FeeCalculator`. The
//! local preview and the server mirror in `groupsave-quote` both go through it.

pub mod calculator;
pub mod error;
pub mod request;
pub mod result;
pub mod schedule;

pub use calculator::{
    calculate_service_fee, calculate_withdrawal_fee, FeeCalculator, StandardFeeCalculator,
};
pub use error::{FeeError, FeeResult};
pub use request::WithdrawalFeeRequest;
pub use result::{ContributionFeeResult, FeeBreakdown, WithdrawalFeeResult};
pub use schedule::FeeSchedule;

// Re-export core types used in the public API
pub use groupsave_core::{Amount, FeeTier};
