//! `payday transactions`

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::PaydayResult;
use crate::models::{Money, TransactionKind};
use crate::services::{LedgerService, TransactionFilter};
use crate::storage::read_snapshot;

#[derive(Args)]
pub struct TransactionArgs {
    /// Snapshot file (.json, .yaml or .yml)
    pub snapshot: PathBuf,

    /// Only income or only expense
    #[arg(short, long)]
    pub kind: Option<TransactionKind>,

    /// Only this category (case and spacing are ignored)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only amounts of at least this much, e.g. 12.50
    #[arg(long, value_name = "AMOUNT")]
    pub min_amount: Option<Money>,

    /// Maximum number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle the transactions command
pub fn handle_transactions_command(settings: &Settings, args: TransactionArgs) -> PaydayResult<()> {
    let snapshot = read_snapshot(&args.snapshot)?;

    let filter = TransactionFilter {
        kind: args.kind,
        category: args.category,
        min_amount: args.min_amount,
        limit: args.limit.unwrap_or(settings.transaction_limit),
    };
    let transactions = LedgerService::filter(&snapshot.transactions, &filter);

    print!(
        "{}",
        format_transaction_register(&transactions, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
