//! GroupSave Core - Domain types
//!
//! This crate contains the fundamental types shared by the fee crates:
//! - `Amount`: Strictly positive decimal wrapper for user-entered amounts
//! - `FeeTier`: Withdrawal processing-time tiers

pub mod amount;
pub mod error;
pub mod tier;

pub use amount::Amount;
pub use error::{CoreError, CoreResult};
pub use tier::FeeTier;
