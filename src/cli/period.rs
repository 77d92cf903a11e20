//! `payday period`

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::format_period;
use crate::error::{PaydayError, PaydayResult};
use crate::services::PeriodService;
use crate::storage::{read_snapshot, write_snapshot_atomic};

#[derive(Args)]
pub struct PeriodArgs {
    /// Snapshot file (.json, .yaml or .yml)
    pub snapshot: PathBuf,

    /// Number of upcoming paydays to list
    #[arg(short, long, default_value = "3")]
    pub upcoming: usize,

    /// Also list this many earlier periods
    #[arg(long, default_value = "0")]
    pub history: usize,

    /// Write an advanced payday back to the snapshot file when stale
    #[arg(long)]
    pub advance: bool,
}

/// Handle the period command
pub fn handle_period_command(settings: &Settings, args: PeriodArgs, today: NaiveDate) -> PaydayResult<()> {
    let mut snapshot = read_snapshot(&args.snapshot)?;
    let schedule = snapshot
        .schedule
        .as_ref()
        .ok_or(PaydayError::MissingSchedule { user: snapshot.user_id })?;

    let resolved = PeriodService::current_period(schedule, today);
    let paydays = PeriodService::upcoming_paydays(schedule, today, args.upcoming);
    print!("{}", format_period(&resolved, today, &paydays, &settings.date_format));

    if args.history > 0 {
        println!();
        println!("Earlier periods:");
        for period in PeriodService::recent_periods(schedule, today, args.history + 1)
            .iter()
            .skip(1)
        {
            println!("  {}", PeriodService::format_period_friendly(period));
        }
    }

    if args.advance && resolved.is_stale {
        if let Some(schedule) = snapshot.schedule.as_mut() {
            schedule.next_payday = resolved.next_payday;
        }
        write_snapshot_atomic(&args.snapshot, &snapshot)?;
        info!(path = %args.snapshot.display(), payday = %resolved.next_payday, "advanced stored payday");
        println!();
        println!("Stored payday advanced to {}", resolved.next_payday);
    }

    Ok(())
}
