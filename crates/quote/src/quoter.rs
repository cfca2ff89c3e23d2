//! Preview-then-confirm fee quoting
//!
//! `preview_*` answers immediately from the local calculator so a form can
//! show the fee as the member types. `confirm_*` asks the fee service for the
//! authoritative figure. Only a confirmed quote should be used to charge;
//! when the service is unreachable the confirm call fails rather than
//! promoting the preview.

use chrono::{DateTime, Utc};
use groupsave_fees::{
    ContributionFeeResult, FeeCalculator, WithdrawalFeeRequest, WithdrawalFeeResult,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{QuoteError, QuoteResult};
use crate::source::FeeQuoteSource;
use crate::wire::{ServiceFeeCalculationRequest, WithdrawalCalculationRequest};

/// A local estimate paired with the service's answer
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmedQuote<T> {
    /// What the local calculator predicted
    pub estimate: T,
    /// What the fee service will charge
    pub confirmed: T,
    pub confirmed_at: DateTime<Utc>,
    /// Name of the source that confirmed the quote
    pub source: String,
}

impl<T: PartialEq> ConfirmedQuote<T> {
    /// True when the preview shown to the member was exact
    pub fn matches_estimate(&self) -> bool {
        self.estimate == self.confirmed
    }
}

impl ConfirmedQuote<WithdrawalFeeResult> {
    /// Confirmed fee minus estimated fee (positive: member pays more than shown)
    pub fn discrepancy(&self) -> Decimal {
        self.confirmed.fee_amount - self.estimate.fee_amount
    }

    /// Amount the member will actually receive
    pub fn payout(&self) -> Decimal {
        self.confirmed.net_amount
    }
}

impl ConfirmedQuote<ContributionFeeResult> {
    /// Confirmed fee minus estimated fee (positive: member pays more than shown)
    pub fn discrepancy(&self) -> Decimal {
        self.confirmed.fee_amount - self.estimate.fee_amount
    }

    /// Amount the member will actually be charged
    pub fn charge(&self) -> Decimal {
        self.confirmed.total_charge_amount
    }
}

/// Fee quoter: local preview + authoritative confirmation
pub struct FeeQuoter {
    calculator: Arc<dyn FeeCalculator>,
    source: Arc<dyn FeeQuoteSource>,
}

impl FeeQuoter {
    pub fn new(calculator: Arc<dyn FeeCalculator>, source: Arc<dyn FeeQuoteSource>) -> Self {
        Self { calculator, source }
    }

    /// The local calculator used for previews
    pub fn calculator(&self) -> &dyn FeeCalculator {
        self.calculator.as_ref()
    }

    /// Instant withdrawal fee estimate
    pub fn preview_withdrawal(&self, request: &WithdrawalFeeRequest) -> QuoteResult<WithdrawalFeeResult> {
        Ok(self.calculator.quote_withdrawal(request)?)
    }

    /// Instant service fee estimate
    pub fn preview_service_fee(&self, amount: Decimal) -> QuoteResult<ContributionFeeResult> {
        Ok(self.calculator.quote_service_fee(amount)?)
    }

    /// Estimate locally, then confirm with the fee service
    pub async fn confirm_withdrawal(
        &self,
        request: &WithdrawalFeeRequest,
    ) -> QuoteResult<ConfirmedQuote<WithdrawalFeeResult>> {
        let estimate = self.preview_withdrawal(request)?;

        let body = WithdrawalCalculationRequest::from(request);
        let confirmed = self.source.withdrawal_calculation(&body).await?;

        if confirmed.original_amount != estimate.original_amount {
            return Err(QuoteError::InvalidResponse(format!(
                "quoted amount {} does not match requested amount {}",
                confirmed.original_amount, estimate.original_amount
            )));
        }
        if !confirmed.is_consistent() {
            return Err(QuoteError::InvalidResponse(format!(
                "inconsistent withdrawal fee breakdown: {:?}",
                confirmed
            )));
        }

        let quote = self.finish(estimate, confirmed);
        if quote.matches_estimate() {
            tracing::debug!(
                source = %quote.source,
                amount = %request.amount(),
                tier = request.tier_code(),
                fee = %quote.confirmed.fee_amount,
                "Withdrawal fee confirmed"
            );
        } else {
            tracing::warn!(
                source = %quote.source,
                amount = %request.amount(),
                tier = request.tier_code(),
                estimated_fee = %quote.estimate.fee_amount,
                confirmed_fee = %quote.confirmed.fee_amount,
                discrepancy = %quote.discrepancy(),
                "Withdrawal fee differs from local estimate"
            );
        }

        Ok(quote)
    }

    /// Estimate locally, then confirm with the fee service
    pub async fn confirm_service_fee(
        &self,
        amount: Decimal,
    ) -> QuoteResult<ConfirmedQuote<ContributionFeeResult>> {
        let estimate = self.preview_service_fee(amount)?;

        let body = ServiceFeeCalculationRequest::new(amount);
        let confirmed = self.source.service_fee_calculation(&body).await?;

        if confirmed.contribution_amount != estimate.contribution_amount {
            return Err(QuoteError::InvalidResponse(format!(
                "quoted contribution {} does not match requested amount {}",
                confirmed.contribution_amount, estimate.contribution_amount
            )));
        }
        if !confirmed.is_consistent() {
            return Err(QuoteError::InvalidResponse(format!(
                "inconsistent service fee total: {:?}",
                confirmed
            )));
        }

        let quote = self.finish(estimate, confirmed);
        if quote.matches_estimate() {
            tracing::debug!(
                source = %quote.source,
                amount = %amount,
                fee = %quote.confirmed.fee_amount,
                "Service fee confirmed"
            );
        } else {
            tracing::warn!(
                source = %quote.source,
                amount = %amount,
                estimated_fee = %quote.estimate.fee_amount,
                confirmed_fee = %quote.confirmed.fee_amount,
                discrepancy = %quote.discrepancy(),
                "Service fee differs from local estimate"
            );
        }

        Ok(quote)
    }

    fn finish<T>(&self, estimate: T, confirmed: T) -> ConfirmedQuote<T> {
        ConfirmedQuote {
            estimate,
            confirmed,
            confirmed_at: Utc::now(),
            source: self.source.name().to_string(),
        }
    }
}
