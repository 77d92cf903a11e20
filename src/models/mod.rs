//! Core data models for Payday
//!
//! Plain, storage-agnostic records: pay schedules, transactions, budgets,
//! recurring bills, and the per-user snapshot bundling them.

pub mod bill;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod schedule;
pub mod snapshot;
pub mod transaction;

pub use bill::RecurringBill;
pub use budget::{Budget, BudgetStatus};
pub use category::{CategoryKey, DEFAULT_CATEGORIES};
pub use ids::{BillId, BudgetId, TransactionId, UserId};
pub use money::Money;
pub use period::{PayPeriod, ResolvedPeriod};
pub use schedule::{PayFrequency, PaySchedule};
pub use snapshot::UserSnapshot;
pub use transaction::{Transaction, TransactionKind};
