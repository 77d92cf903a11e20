//! `payday budget`

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_budget_table;
use crate::error::{PaydayError, PaydayResult};
use crate::export::export_budget_csv;
use crate::services::{LedgerService, PeriodService, ReconcileService};
use crate::storage::read_snapshot;

#[derive(Args)]
pub struct BudgetArgs {
    /// Snapshot file (.json, .yaml or .yml)
    pub snapshot: PathBuf,

    /// Also write the reconciliation to this CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

/// Handle the budget command
pub fn handle_budget_command(settings: &Settings, args: BudgetArgs, today: NaiveDate) -> PaydayResult<()> {
    let snapshot = read_snapshot(&args.snapshot)?;
    snapshot.validate()?;
    let schedule = snapshot
        .schedule
        .as_ref()
        .ok_or(PaydayError::MissingSchedule { user: snapshot.user_id })?;

    let period = PeriodService::current_period(schedule, today).period;
    let summary = LedgerService::aggregate(&snapshot.transactions, &period);
    let reconciliation = ReconcileService::reconcile(&snapshot.budgets, &summary)?;

    println!("Budget for {}", PeriodService::format_period_friendly(&period));
    println!();
    print!(
        "{}",
        format_budget_table(&reconciliation, &settings.currency_symbol, settings.near_limit_percent)
    );

    if let Some(path) = args.csv {
        let file = File::create(&path)
            .map_err(|e| PaydayError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        export_budget_csv(&reconciliation, file)?;
        println!();
        println!("Wrote {}", path.display());
    }

    Ok(())
}
