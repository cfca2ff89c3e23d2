//! Integration tests for preview + confirmation against the mock fee service

use std::sync::Arc;

use groupsave_fees::{
    calculate_withdrawal_fee, FeeSchedule, StandardFeeCalculator, WithdrawalFeeRequest,
};
use groupsave_quote::{
    FeeQuoteSource, FeeQuoter, MockFeeService, QuoteError, WithdrawalCalculationRequest,
    WITHDRAWAL_CALCULATION_PATH,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn local_calculator() -> Arc<StandardFeeCalculator> {
    Arc::new(StandardFeeCalculator::new())
}

/// Test: preview → confirm → charge the confirmed figure
#[tokio::test]
async fn test_preview_then_confirm_workflow() {
    let service = Arc::new(MockFeeService::new());
    let quoter = FeeQuoter::new(local_calculator(), service.clone());

    let request = WithdrawalFeeRequest::new(dec!(250), true, "DAYS_7").unwrap();

    // 1. Instant preview while the member fills in the form
    let preview = quoter.preview_withdrawal(&request).unwrap();
    assert_eq!(preview.fee_percentage, dec!(35));
    assert_eq!(preview.fee_amount, dec!(87.5));
    assert_eq!(preview.net_amount, dec!(162.5));
    assert_eq!(service.request_count(), 0);

    // 2. Confirm with the service before submitting
    let quote = quoter.confirm_withdrawal(&request).await.unwrap();
    assert_eq!(service.request_count(), 1);
    assert!(quote.matches_estimate());
    assert_eq!(quote.estimate, preview);
    assert_eq!(quote.payout(), dec!(162.5));
    assert_eq!(quote.confirmed.fee_breakdown.early_withdrawal_fee, dec!(50));
    assert_eq!(quote.confirmed.fee_breakdown.processing_time_fee, dec!(37.5));
}

/// Test: server raised its INSTANT rate - the discrepancy is surfaced
#[tokio::test]
async fn test_server_price_change_is_detected() {
    let server_schedule = FeeSchedule {
        instant_pct: dec!(25),
        ..FeeSchedule::default()
    };
    let service = MockFeeService::with_schedule(server_schedule).unwrap();
    let quoter = FeeQuoter::new(local_calculator(), Arc::new(service));

    let request = WithdrawalFeeRequest::new(dec!(100), true, "INSTANT").unwrap();
    let quote = quoter.confirm_withdrawal(&request).await.unwrap();

    assert!(!quote.matches_estimate());
    assert_eq!(quote.estimate.fee_amount, dec!(40));
    assert_eq!(quote.confirmed.fee_amount, dec!(45));
    assert_eq!(quote.discrepancy(), dec!(5));
    // The confirmed figure is what gets paid out
    assert_eq!(quote.payout(), dec!(55));
}

/// Test: server rounds to cents, local estimate does not
#[tokio::test]
async fn test_server_rounding_discrepancy() {
    let service = MockFeeService::new().with_rounding(2);
    let quoter = FeeQuoter::new(local_calculator(), Arc::new(service));

    let quote = quoter.confirm_service_fee(dec!(0.25)).await.unwrap();

    assert_eq!(quote.estimate.fee_amount, dec!(0.025));
    assert_eq!(quote.confirmed.fee_amount, dec!(0.03));
    assert_eq!(quote.discrepancy(), dec!(0.005));
    assert_eq!(quote.charge(), dec!(0.28));
}

/// Test: high-precision amounts survive the JSON round trip
#[tokio::test]
async fn test_high_precision_amounts_confirm_exactly() {
    let quoter = FeeQuoter::new(local_calculator(), Arc::new(MockFeeService::new()));

    for amount in [dec!(1234567.891234567), dec!(123456789.12345678), dec!(0.1234567890123456789)] {
        let request = WithdrawalFeeRequest::new(amount, true, "DAYS_7").unwrap();
        let quote = quoter.confirm_withdrawal(&request).await.unwrap();

        assert!(quote.matches_estimate(), "amount={}", amount);
        assert!(quote.confirmed.is_consistent());
        assert_eq!(quote.confirmed.original_amount, amount);
        assert_eq!(quote.confirmed.fee_amount, amount * dec!(35) / dec!(100));

        let service_quote = quoter.confirm_service_fee(amount).await.unwrap();
        assert!(service_quote.matches_estimate(), "amount={}", amount);
        assert_eq!(service_quote.charge(), amount + amount * dec!(10) / dec!(100));
    }

    let quote = quoter
        .confirm_withdrawal(&WithdrawalFeeRequest::new(dec!(1234567.891234567), true, "DAYS_7").unwrap())
        .await
        .unwrap();
    assert_eq!(quote.confirmed.fee_breakdown.processing_time_fee, dec!(185185.18368518505));
}

/// Test: an unknown tier is priced as DAYS_30 on both sides
#[tokio::test]
async fn test_unknown_tier_round_trip() {
    let quoter = FeeQuoter::new(local_calculator(), Arc::new(MockFeeService::new()));

    let request = WithdrawalFeeRequest::new(dec!(50), false, "UNKNOWN_TIER").unwrap();
    let quote = quoter.confirm_withdrawal(&request).await.unwrap();

    assert!(quote.matches_estimate());
    assert_eq!(quote.confirmed.fee_percentage, dec!(5));
    assert_eq!(quote.confirmed.fee_amount, dec!(2.5));
    assert_eq!(quote.confirmed.net_amount, dec!(47.5));
}

/// Test: strict server, lenient client - the server's rejection wins
#[tokio::test]
async fn test_strict_server_rejects_unknown_tier() {
    let server_schedule = FeeSchedule {
        strict_tiers: true,
        ..FeeSchedule::default()
    };
    let service = MockFeeService::with_schedule(server_schedule).unwrap();
    let quoter = FeeQuoter::new(local_calculator(), Arc::new(service));

    let request = WithdrawalFeeRequest::new(dec!(50), false, "UNKNOWN_TIER").unwrap();

    // Preview still works locally
    assert!(quoter.preview_withdrawal(&request).is_ok());

    let result = quoter.confirm_withdrawal(&request).await;
    assert!(matches!(result, Err(QuoteError::Validation(_))));
}

/// Test: service outage never produces a chargeable quote
#[tokio::test]
async fn test_outage_and_recovery() {
    let service = Arc::new(MockFeeService::new());
    let quoter = FeeQuoter::new(local_calculator(), service.clone());
    let request = WithdrawalFeeRequest::new(dec!(100), false, "DAYS_14").unwrap();

    service.set_online(false);
    let err = quoter.confirm_withdrawal(&request).await.unwrap_err();
    assert!(err.is_retryable());

    service.set_online(true);
    let quote = quoter.confirm_withdrawal(&request).await.unwrap();
    assert_eq!(quote.payout(), dec!(90));
    assert_eq!(service.request_count(), 2);
}

/// Test: local and server results are interchangeable JSON documents
#[tokio::test]
async fn test_local_and_server_json_are_interchangeable() {
    let service = MockFeeService::new();
    let body = WithdrawalCalculationRequest {
        amount: dec!(100),
        is_early_withdrawal: true,
        processing_tier: "INSTANT".to_string(),
    };

    let server_json = service
        .handle(WITHDRAWAL_CALCULATION_PATH, &serde_json::to_string(&body).unwrap())
        .unwrap();
    let server_value: serde_json::Value = serde_json::from_str(&server_json).unwrap();

    let local = calculate_withdrawal_fee(dec!(100), true, "INSTANT");
    let local_value = serde_json::to_value(local).unwrap();

    assert_eq!(server_value, local_value);
}

/// Test: many concurrent confirmations share one quoter
#[tokio::test]
async fn test_concurrent_confirmations() {
    let service = Arc::new(MockFeeService::new());
    let quoter = Arc::new(FeeQuoter::new(local_calculator(), service.clone()));

    let mut handles = Vec::new();
    for i in 1..=8i64 {
        let quoter = quoter.clone();
        handles.push(tokio::spawn(async move {
            let amount = Decimal::new(i * 100, 0);
            quoter.confirm_service_fee(amount).await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let quote = handle.await.unwrap().unwrap();
        let amount = Decimal::new((i as i64 + 1) * 100, 0);
        assert!(quote.matches_estimate());
        assert_eq!(quote.charge(), amount + amount / dec!(10));
    }

    assert_eq!(service.request_count(), 8);
}

/// Test: the trait object works directly, without the quoter
#[tokio::test]
async fn test_source_trait_object() {
    let source: Arc<dyn FeeQuoteSource> = Arc::new(MockFeeService::new());
    let body = WithdrawalCalculationRequest {
        amount: dec!(1000),
        is_early_withdrawal: false,
        processing_tier: "DAYS_30".to_string(),
    };

    let result = source.withdrawal_calculation(&body).await.unwrap();
    assert_eq!(source.name(), "mock");
    assert_eq!(result.fee_amount, dec!(50));
    assert!(result.is_consistent());
}
