//! `payday bills`

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_bill_list;
use crate::error::PaydayResult;
use crate::models::{Money, RecurringBill};
use crate::services::{BillService, PeriodService};
use crate::storage::read_snapshot;

#[derive(Args)]
pub struct BillsArgs {
    /// Snapshot file (.json, .yaml or .yml)
    pub snapshot: PathBuf,

    /// Include inactive bills
    #[arg(short, long)]
    pub all: bool,
}

/// Handle the bills command
pub fn handle_bills_command(settings: &Settings, args: BillsArgs, today: NaiveDate) -> PaydayResult<()> {
    let snapshot = read_snapshot(&args.snapshot)?;
    snapshot.validate()?;

    let mut rows: Vec<(&RecurringBill, Option<NaiveDate>)> = Vec::new();
    for bill in snapshot.bills.iter().filter(|b| args.all || b.active) {
        let next_due = if bill.active {
            Some(BillService::next_occurrence(bill, today)?)
        } else {
            None
        };
        rows.push((bill, next_due));
    }
    print!(
        "{}",
        format_bill_list(&rows, &settings.currency_symbol, &settings.date_format)
    );

    if let Some(schedule) = &snapshot.schedule {
        let resolved = PeriodService::current_period(schedule, today);
        let due = BillService::upcoming(&snapshot.bills, today, resolved.next_payday)?;
        let total: Money = due.iter().map(|o| o.amount).sum();

        println!();
        println!(
            "Due before payday {}: {}",
            resolved.next_payday.format(&settings.date_format),
            total.format_with_symbol(&settings.currency_symbol)
        );
        for occurrence in &due {
            println!(
                "  {} {}",
                occurrence.due_on.format(&settings.date_format),
                occurrence.name
            );
        }
    }

    Ok(())
}
