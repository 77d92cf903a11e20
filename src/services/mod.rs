//! Service layer for Payday
//!
//! Each service is a stateless set of operations over borrowed model values.
//! Nothing here reads the clock or touches storage; "today" is always passed in.

pub mod bills;
pub mod ledger;
pub mod period;
pub mod projection;
pub mod reconcile;

pub use bills::{BillOccurrence, BillService};
pub use ledger::{LedgerService, LedgerSummary, TransactionFilter};
pub use period::PeriodService;
pub use projection::{IncomeBasis, Projection, ProjectionService};
pub use reconcile::{ReconcileService, Reconciliation};
