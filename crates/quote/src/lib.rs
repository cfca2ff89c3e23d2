//! GroupSave Fee Quotes
//!
//! The fee service is the source of truth for what a member is charged. This
//! crate gives a screen an instant local preview and then confirms it against
//! the service:
//! - `wire`: request bodies and paths of the fee-calculation endpoints
//! - `FeeQuoteSource`: the seam an HTTP client implements
//! - `MockFeeService`: in-process mirror of the service for tests and demos
//! - `FeeQuoter`: preview now, confirm before charging

mod error;
mod mock;
mod quoter;
mod source;
pub mod wire;

pub use error::{QuoteError, QuoteResult};
pub use mock::MockFeeService;
pub use quoter::{ConfirmedQuote, FeeQuoter};
pub use source::FeeQuoteSource;
pub use wire::{
    ServiceFeeCalculationRequest, WithdrawalCalculationRequest, SERVICE_FEE_CALCULATION_PATH,
    WITHDRAWAL_CALCULATION_PATH,
};
