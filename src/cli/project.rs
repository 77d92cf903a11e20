//! `payday project`

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_projection;
use crate::error::{PaydayError, PaydayResult};
use crate::export::{export_projection_json, export_projection_yaml};
use crate::services::ProjectionService;
use crate::storage::read_snapshots;

#[derive(Args)]
pub struct ProjectArgs {
    /// Snapshot file (.json, .yaml or .yml)
    pub snapshot: PathBuf,

    /// Print the projection as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Print the projection as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Handle the project command
///
/// A file holding several snapshots is projected user by user; failures are
/// reported per user and the command fails if any user failed.
pub fn handle_project_command(settings: &Settings, args: ProjectArgs, today: NaiveDate) -> PaydayResult<()> {
    let snapshots = read_snapshots(&args.snapshot)?;
    let results = ProjectionService::project_many(&snapshots, today);
    let many = results.len() > 1;
    let mut failed = 0usize;

    for (user, result) in results {
        let projection = match result {
            Ok(projection) => projection,
            Err(e) if many => {
                eprintln!("{}: {}", user, e);
                failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        if args.json {
            export_projection_json(&projection, &mut io::stdout().lock())?;
        } else if args.yaml {
            export_projection_yaml(&projection, &mut io::stdout().lock())?;
        } else {
            if many {
                println!("User {}", user);
            }
            print!("{}", format_projection(&projection, settings));
            if let Some(advanced) = projection.schedule_advance() {
                println!();
                println!(
                    "Note: stored payday is out of date. Run 'payday period --advance' to move it to {}.",
                    advanced
                );
            }
            if many {
                println!();
            }
        }
    }

    if failed > 0 {
        return Err(PaydayError::Validation(format!(
            "{} of {} projections failed",
            failed,
            snapshots.len()
        )));
    }

    Ok(())
}
