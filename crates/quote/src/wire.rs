//! Fee service wire format
//!
//! Request bodies for the two fee-calculation endpoints. Responses are the
//! result types from `groupsave_fees`, which already serialize in the
//! service's camelCase shape.

use groupsave_fees::{FeeResult, WithdrawalFeeRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `POST` path for withdrawal fee calculation
pub const WITHDRAWAL_CALCULATION_PATH: &str = "/fees/withdrawal-calculation";

/// `POST` path for contribution service fee calculation
pub const SERVICE_FEE_CALCULATION_PATH: &str = "/fees/service-fee-calculation";

/// Body of `POST /fees/withdrawal-calculation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalCalculationRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub is_early_withdrawal: bool,
    /// Sent verbatim; the service decides how to treat unknown codes
    pub processing_tier: String,
}

impl WithdrawalCalculationRequest {
    /// Validate into a fee request (amount must be positive)
    pub fn to_fee_request(&self) -> FeeResult<WithdrawalFeeRequest> {
        WithdrawalFeeRequest::new(self.amount, self.is_early_withdrawal, self.processing_tier.as_str())
    }
}

impl From<&WithdrawalFeeRequest> for WithdrawalCalculationRequest {
    fn from(request: &WithdrawalFeeRequest) -> Self {
        Self {
            amount: request.amount().value(),
            is_early_withdrawal: request.is_early_withdrawal(),
            processing_tier: request.tier_code().to_string(),
        }
    }
}

/// Body of `POST /fees/service-fee-calculation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFeeCalculationRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl ServiceFeeCalculationRequest {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupsave_fees::FeeError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdrawal_request_json_shape() {
        let request = WithdrawalFeeRequest::new(dec!(100), true, "INSTANT").unwrap();
        let body = WithdrawalCalculationRequest::from(&request);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["amount"].as_f64(), Some(100.0));
        assert_eq!(json["isEarlyWithdrawal"], serde_json::Value::Bool(true));
        assert_eq!(json["processingTier"], "INSTANT");
    }

    #[test]
    fn test_withdrawal_request_from_client_json() {
        let body = r#"{ "amount": 50.5, "isEarlyWithdrawal": false, "processingTier": "UNKNOWN_TIER" }"#;
        let parsed: WithdrawalCalculationRequest = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.amount, dec!(50.5));
        assert_eq!(parsed.processing_tier, "UNKNOWN_TIER");

        let request = parsed.to_fee_request().unwrap();
        assert_eq!(request.tier_code(), "UNKNOWN_TIER");
    }

    #[test]
    fn test_to_fee_request_rejects_zero() {
        let body = WithdrawalCalculationRequest {
            amount: Decimal::ZERO,
            is_early_withdrawal: false,
            processing_tier: "DAYS_7".to_string(),
        };
        assert!(matches!(body.to_fee_request(), Err(FeeError::InvalidAmount(_))));
    }

    #[test]
    fn test_service_fee_request_json_shape() {
        let json = serde_json::to_string(&ServiceFeeCalculationRequest::new(dec!(25))).unwrap();
        assert_eq!(json, r#"{"amount":25}"#);
    }
}
