//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Every data command loads
//! a snapshot file and works relative to an explicit `today`.

pub mod bills;
pub mod budget;
pub mod config;
pub mod period;
pub mod project;
pub mod transaction;

pub use bills::{handle_bills_command, BillsArgs};
pub use budget::{handle_budget_command, BudgetArgs};
pub use config::{handle_categories_command, handle_config_command, handle_init_command};
pub use period::{handle_period_command, PeriodArgs};
pub use project::{handle_project_command, ProjectArgs};
pub use transaction::{handle_transactions_command, TransactionArgs};
