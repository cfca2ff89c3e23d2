//! Fee quote source trait

use async_trait::async_trait;
use groupsave_fees::{ContributionFeeResult, WithdrawalFeeResult};

use crate::error::QuoteResult;
use crate::wire::{ServiceFeeCalculationRequest, WithdrawalCalculationRequest};

/// Authoritative fee calculation - interface for the fee service
///
/// Implementations can be:
/// - MockFeeService: in-process mirror for tests
/// - an HTTP client posting to `WITHDRAWAL_CALCULATION_PATH` and
///   `SERVICE_FEE_CALCULATION_PATH`
#[async_trait]
pub trait FeeQuoteSource: Send + Sync {
    /// Short name for logs (e.g. "mock", "api")
    fn name(&self) -> &str;

    /// `POST /fees/withdrawal-calculation`
    async fn withdrawal_calculation(
        &self,
        request: &WithdrawalCalculationRequest,
    ) -> QuoteResult<WithdrawalFeeResult>;

    /// `POST /fees/service-fee-calculation`
    async fn service_fee_calculation(
        &self,
        request: &ServiceFeeCalculationRequest,
    ) -> QuoteResult<ContributionFeeResult>;
}
