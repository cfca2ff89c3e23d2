//! GroupSave CLI - Main entry point
//!
//! Usage:
//! ```bash
//! groupsave withdrawal 200 --early --tier DAYS_14
//! groupsave service-fee 100 --json
//! groupsave --config fees.json withdrawal 100 --tier INSTANT --confirm
//! groupsave schedule
//! ```

use clap::{Parser, Subcommand};
use groupsave_fees::{FeeSchedule, StandardFeeCalculator};
use rust_decimal::Decimal;
use std::path::PathBuf;

mod commands;

use commands::{OutputOptions, QuoteMode};

#[derive(Parser)]
#[command(name = "groupsave")]
#[command(about = "GroupSave - Group savings fee calculator", long_about = None)]
struct Cli {
    /// Fee schedule JSON file (defaults to the published rates)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results in the fee service's JSON shape
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places for displayed amounts
    #[arg(long, default_value = "2", global = true)]
    decimals: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fee for a withdrawal
    Withdrawal {
        /// Amount to withdraw
        amount: Decimal,
        /// Withdrawing before the group's maturity date
        #[arg(long)]
        early: bool,
        /// Processing tier (INSTANT, DAYS_7, DAYS_14, DAYS_30)
        #[arg(long, default_value = "DAYS_30")]
        tier: String,
        /// Also confirm against the fee service mirror
        #[arg(long)]
        confirm: bool,
    },

    /// Calculate the service fee for a contribution
    ServiceFee {
        /// Amount to contribute
        amount: Decimal,
        /// Also confirm against the fee service mirror
        #[arg(long)]
        confirm: bool,
    },

    /// Show the active fee schedule
    Schedule,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let schedule = match &cli.config {
        Some(path) => FeeSchedule::from_file(path)?,
        None => FeeSchedule::default(),
    };
    let calculator = StandardFeeCalculator::with_schedule(schedule)?;
    tracing::debug!(config = ?cli.config, "Fee schedule loaded");

    let output = OutputOptions {
        json: cli.json,
        decimals: cli.decimals,
    };

    match cli.command {
        Commands::Withdrawal {
            amount,
            early,
            tier,
            confirm,
        } => {
            let mode = QuoteMode::from_flag(confirm);
            commands::withdrawal(calculator, amount, early, &tier, mode, output).await?;
        }

        Commands::ServiceFee { amount, confirm } => {
            let mode = QuoteMode::from_flag(confirm);
            commands::service_fee(calculator, amount, mode, output).await?;
        }

        Commands::Schedule => {
            commands::schedule(&calculator, output)?;
        }
    }

    Ok(())
}
