//! Export module for Payday
//!
//! - CSV: budget reconciliation rows (spreadsheet-compatible)
//! - JSON: the full projection, for scripts and other tools
//! - YAML: the full projection, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_budget_csv;
pub use self::json::{export_projection_json, ProjectionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_projection_yaml;
