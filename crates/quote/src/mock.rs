//! Mock fee service for testing
//!
//! Mirrors the backend's fee endpoints in-process. Requests and responses go
//! through their JSON form, so tests exercise the same wire shape a real
//! client would see.

use async_trait::async_trait;
use groupsave_fees::{
    ContributionFeeResult, FeeCalculator, FeeSchedule, StandardFeeCalculator, WithdrawalFeeResult,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::{QuoteError, QuoteResult};
use crate::source::FeeQuoteSource;
use crate::wire::{
    ServiceFeeCalculationRequest, WithdrawalCalculationRequest, SERVICE_FEE_CALCULATION_PATH,
    WITHDRAWAL_CALCULATION_PATH,
};

/// Mock Fee Service
///
/// Prices with its own `StandardFeeCalculator`, so giving it a different
/// schedule simulates a server-side price change.
pub struct MockFeeService {
    calculator: StandardFeeCalculator,
    /// Round responses to this many decimal places, like a ledger would
    round_dp: Option<u32>,
    online: AtomicBool,
    requests: AtomicUsize,
}

impl MockFeeService {
    /// Create a mock service charging the published rates
    pub fn new() -> Self {
        Self {
            calculator: StandardFeeCalculator::new(),
            round_dp: None,
            online: AtomicBool::new(true),
            requests: AtomicUsize::new(0),
        }
    }

    /// Create a mock service with its own schedule
    pub fn with_schedule(schedule: FeeSchedule) -> QuoteResult<Self> {
        Ok(Self {
            calculator: StandardFeeCalculator::with_schedule(schedule)?,
            ..Self::new()
        })
    }

    /// Round every response to `dp` decimal places
    pub fn with_rounding(mut self, dp: u32) -> Self {
        self.round_dp = Some(dp);
        self
    }

    /// Simulate the service going down or coming back
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Number of requests received (including failed ones)
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Handle a raw JSON request body for `path`, returning the JSON response body
    pub fn handle(&self, path: &str, body: &str) -> QuoteResult<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        if !self.online.load(Ordering::SeqCst) {
            return Err(QuoteError::Unavailable(format!("POST {} refused", path)));
        }

        match path {
            WITHDRAWAL_CALCULATION_PATH => {
                let request: WithdrawalCalculationRequest = serde_json::from_str(body)?;
                let mut result = self.calculator.quote_withdrawal(&request.to_fee_request()?)?;
                if let Some(dp) = self.round_dp {
                    result = result.rounded(dp);
                }
                Ok(serde_json::to_string(&result)?)
            }
            SERVICE_FEE_CALCULATION_PATH => {
                let request: ServiceFeeCalculationRequest = serde_json::from_str(body)?;
                let mut result = self.calculator.quote_service_fee(request.amount)?;
                if let Some(dp) = self.round_dp {
                    result = result.rounded(dp);
                }
                Ok(serde_json::to_string(&result)?)
            }
            other => Err(QuoteError::InvalidResponse(format!("404 Not Found: {}", other))),
        }
    }
}

impl Default for MockFeeService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeeQuoteSource for MockFeeService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn withdrawal_calculation(
        &self,
        request: &WithdrawalCalculationRequest,
    ) -> QuoteResult<WithdrawalFeeResult> {
        let body = serde_json::to_string(request)?;
        let response = self.handle(WITHDRAWAL_CALCULATION_PATH, &body)?;
        Ok(serde_json::from_str(&response)?)
    }

    async fn service_fee_calculation(
        &self,
        request: &ServiceFeeCalculationRequest,
    ) -> QuoteResult<ContributionFeeResult> {
        let body = serde_json::to_string(request)?;
        let response = self.handle(SERVICE_FEE_CALCULATION_PATH, &body)?;
        Ok(serde_json::from_str(&response)?)
    }
}
