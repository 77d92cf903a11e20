//! JSON Export functionality
//!
//! Wraps a projection in a versioned envelope before writing it out.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::PaydayResult;
use crate::services::projection::Projection;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported projection with version metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    pub projection: Projection,
}

impl ProjectionExport {
    pub fn new(projection: &Projection) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            projection: projection.clone(),
        }
    }
}

/// Export a projection as pretty-printed JSON
pub fn export_projection_json<W: Write>(projection: &Projection, writer: &mut W) -> PaydayResult<()> {
    let export = ProjectionExport::new(projection);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
