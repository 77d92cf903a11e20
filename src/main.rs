use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use payday::cli::{
    handle_bills_command, handle_budget_command, handle_categories_command, handle_config_command,
    handle_init_command, handle_period_command, handle_project_command, handle_transactions_command,
    BillsArgs, BudgetArgs, PeriodArgs, ProjectArgs, TransactionArgs,
};
use payday::config::{PaydayPaths, Settings};
use payday::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "payday",
    version,
    about = "Cash-flow projection until the next payday",
    long_about = "Payday projects how much money is left until the next payday. \
                  It resolves the current biweekly pay period, totals the period's \
                  income and spending, subtracts bills still due, and reconciles \
                  spending against per-category budgets."
)]
struct Cli {
    /// Date to treat as today (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the balance left at the next payday
    Project(ProjectArgs),

    /// Show the current pay period and upcoming paydays
    Period(PeriodArgs),

    /// Reconcile this period's spending against budgets
    Budget(BudgetArgs),

    /// List recurring bills and what is due before payday
    Bills(BillsArgs),

    /// List transactions, newest first
    #[command(alias = "txn")]
    Transactions(TransactionArgs),

    /// List the default spending categories
    Categories,

    /// Show paths and settings
    Config,

    /// Write default settings to the config directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PaydayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match cli.command {
        Some(Commands::Project(args)) => handle_project_command(&settings, args, today)?,
        Some(Commands::Period(args)) => handle_period_command(&settings, args, today)?,
        Some(Commands::Budget(args)) => handle_budget_command(&settings, args, today)?,
        Some(Commands::Bills(args)) => handle_bills_command(&settings, args, today)?,
        Some(Commands::Transactions(args)) => handle_transactions_command(&settings, args)?,
        Some(Commands::Categories) => handle_categories_command()?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        None => {
            println!("Payday - cash-flow projection until the next payday");
            println!();
            println!("Run 'payday --help' for usage information.");
        }
    }

    Ok(())
}
