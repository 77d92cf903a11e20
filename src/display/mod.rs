//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod bills;
pub mod budget;
pub mod period;
pub mod projection;
pub mod report;
pub mod transaction;

pub use bills::format_bill_list;
pub use budget::format_budget_table;
pub use period::format_period;
pub use projection::format_projection;
pub use transaction::format_transaction_register;
