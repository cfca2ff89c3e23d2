//! CLI commands

use groupsave_fees::{
    ContributionFeeResult, FeeCalculator, FeeTier, StandardFeeCalculator, WithdrawalFeeRequest,
    WithdrawalFeeResult,
};
use groupsave_quote::{FeeQuoter, MockFeeService, QuoteError};
use rust_decimal::Decimal;
use std::sync::Arc;

/// How results are printed
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub decimals: u32,
}

/// Local preview only, or preview + confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    Preview,
    Confirm,
}

impl QuoteMode {
    pub fn from_flag(confirm: bool) -> Self {
        if confirm {
            QuoteMode::Confirm
        } else {
            QuoteMode::Preview
        }
    }
}

/// Calculate (and optionally confirm) a withdrawal fee
pub async fn withdrawal(
    calculator: StandardFeeCalculator,
    amount: Decimal,
    early: bool,
    tier: &str,
    mode: QuoteMode,
    output: OutputOptions,
) -> Result<(), anyhow::Error> {
    let request = WithdrawalFeeRequest::new(amount, early, tier)?;

    match mode {
        QuoteMode::Preview => {
            let result = calculator.quote_withdrawal(&request)?.rounded(output.decimals);
            if output.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", format_withdrawal(&result));
            }
        }
        QuoteMode::Confirm => {
            let quoter = FeeQuoter::new(Arc::new(calculator), Arc::new(MockFeeService::new()));
            let quote = quoter.confirm_withdrawal(&request).await.map_err(confirmation_error)?;

            if output.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("Estimate:");
                println!("{}", format_withdrawal(&quote.estimate.rounded(output.decimals)));
                println!("Confirmed ({}):", quote.source);
                println!("{}", format_withdrawal(&quote.confirmed.rounded(output.decimals)));
                if !quote.matches_estimate() {
                    println!("⚠️  Fee differs from estimate by {}", quote.discrepancy());
                }
            }
        }
    }

    Ok(())
}

/// Calculate (and optionally confirm) a contribution service fee
pub async fn service_fee(
    calculator: StandardFeeCalculator,
    amount: Decimal,
    mode: QuoteMode,
    output: OutputOptions,
) -> Result<(), anyhow::Error> {
    match mode {
        QuoteMode::Preview => {
            let result = calculator.quote_service_fee(amount)?.rounded(output.decimals);
            if output.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", format_service_fee(&result));
            }
        }
        QuoteMode::Confirm => {
            let quoter = FeeQuoter::new(Arc::new(calculator), Arc::new(MockFeeService::new()));
            let quote = quoter.confirm_service_fee(amount).await.map_err(confirmation_error)?;

            if output.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("Estimate:");
                println!("{}", format_service_fee(&quote.estimate.rounded(output.decimals)));
                println!("Confirmed ({}):", quote.source);
                println!("{}", format_service_fee(&quote.confirmed.rounded(output.decimals)));
                if !quote.matches_estimate() {
                    println!("⚠️  Fee differs from estimate by {}", quote.discrepancy());
                }
            }
        }
    }

    Ok(())
}

/// Attach a hint for the member to a failed confirmation
fn confirmation_error(err: QuoteError) -> anyhow::Error {
    let hint = match &err {
        e if e.is_retryable() => "Fee service is unavailable, try again later",
        QuoteError::Validation(e) if e.is_validation_error() => "Fee service rejected the request",
        _ => "Fee could not be confirmed",
    };
    anyhow::Error::new(err).context(hint)
}

/// Print the active fee schedule
pub fn schedule(calculator: &StandardFeeCalculator, output: OutputOptions) -> Result<(), anyhow::Error> {
    let schedule = calculator.schedule();

    if output.json {
        println!("{}", serde_json::to_string_pretty(schedule)?);
        return Ok(());
    }

    println!("📋 FEE SCHEDULE");
    println!("───────────────────────────────────────");
    println!("   Early withdrawal:   {:>6}%", schedule.early_withdrawal_pct);
    for tier in FeeTier::ALL {
        println!(
            "   {:<18}  {:>6}%   {}",
            tier.code(),
            schedule.tier_pct(tier),
            payout_label(tier)
        );
    }
    println!("   Contribution fee:   {:>6}%", schedule.service_fee_pct);
    println!(
        "   Unknown tiers:      {}",
        if schedule.strict_tiers {
            "rejected"
        } else {
            "priced as DAYS_30"
        }
    );
    println!("───────────────────────────────────────");

    Ok(())
}

fn payout_label(tier: FeeTier) -> String {
    match tier.payout_days() {
        0 => "paid out immediately".to_string(),
        days => format!("paid out within {} days", days),
    }
}

pub fn format_withdrawal(result: &WithdrawalFeeResult) -> String {
    format!(
        "   Amount:           {}\n   \
         Fee ({}%):  {}\n   \
         - early:          {}\n   \
         - processing:     {}\n   \
         You receive:      {}",
        result.original_amount,
        result.fee_percentage,
        result.fee_amount,
        result.fee_breakdown.early_withdrawal_fee,
        result.fee_breakdown.processing_time_fee,
        result.net_amount,
    )
}

pub fn format_service_fee(result: &ContributionFeeResult) -> String {
    format!(
        "   Contribution:     {}\n   \
         Fee ({}%):  {}\n   \
         You pay:          {}",
        result.contribution_amount, result.fee_percentage, result.fee_amount, result.total_charge_amount,
    )
}
