//! Payday - cash-flow projection and budget reconciliation
//!
//! Given one user's pay schedule, transactions, budgets and recurring bills,
//! the engine resolves the current pay period and projects how much money
//! will be left at the next payday. All operations take an explicit `today`
//! and never read the clock.
//!
//! # Architecture
//!
//! - `models`: money, ids, periods, and the input records of a `UserSnapshot`
//! - `services`: period resolution, bill occurrences, ledger aggregation,
//!   budget reconciliation and the cash-flow projection itself
//! - `storage`: loading snapshots from JSON or YAML files
//! - `export`: JSON, YAML and CSV output
//! - `config`, `logging`, `display`, `cli`: the `payday` binary's plumbing
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use payday::models::{Money, PaySchedule, UserId, UserSnapshot};
//! use payday::services::ProjectionService;
//!
//! let payday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let snapshot = UserSnapshot::new(UserId::new())
//!     .with_schedule(PaySchedule::biweekly(payday, Money::from_cents(200_000)));
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let projection = ProjectionService::project(&snapshot, today).unwrap();
//! assert_eq!(projection.projected_balance, Money::from_cents(200_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PaydayError, PaydayResult};
