//! YAML Export functionality

use std::io::Write;

use crate::error::PaydayResult;
use crate::export::json::ProjectionExport;
use crate::services::projection::Projection;

/// Export a projection as YAML with a short header comment
pub fn export_projection_yaml<W: Write>(projection: &Projection, writer: &mut W) -> PaydayResult<()> {
    let export = ProjectionExport::new(projection);

    writeln!(writer, "# Payday projection for {}", projection.period)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaySchedule, UserId, UserSnapshot};
    use crate::services::projection::ProjectionService;
    use chrono::NaiveDate;

    #[test]
    fn test_export_projection_yaml() {
        let snapshot = UserSnapshot::new(UserId::new()).with_schedule(PaySchedule::biweekly(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            Money::from_cents(200000),
        ));
        let projection =
            ProjectionService::project(&snapshot, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()).unwrap();

        let mut buffer = Vec::new();
        export_projection_yaml(&projection, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Payday projection for 2024-03-01..2024-03-15"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("projected_balance: 200000"));
    }
}
