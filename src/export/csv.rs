//! CSV Export functionality
//!
//! One row per budget line, then one row per unbudgeted category. Amounts
//! are written in minor units so spreadsheets never round them.

use serde::Serialize;
use std::io::Write;

use crate::error::PaydayResult;
use crate::services::reconcile::Reconciliation;

#[derive(Serialize)]
struct BudgetRow<'a> {
    category: &'a str,
    budgeted: bool,
    limit_cents: Option<i64>,
    spent_cents: i64,
    remaining_cents: Option<i64>,
    status: String,
    percent_used: Option<i64>,
}

/// Export a reconciliation to CSV
pub fn export_budget_csv<W: Write>(reconciliation: &Reconciliation, writer: W) -> PaydayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for line in &reconciliation.lines {
        csv_writer.serialize(BudgetRow {
            category: &line.category,
            budgeted: true,
            limit_cents: Some(line.limit.cents()),
            spent_cents: line.spent.cents(),
            remaining_cents: Some(line.remaining.cents()),
            status: line.status.to_string(),
            percent_used: Some(line.percent_used),
        })?;
    }

    for spend in &reconciliation.unbudgeted {
        csv_writer.serialize(BudgetRow {
            category: &spend.category,
            budgeted: false,
            limit_cents: None,
            spent_cents: spend.spent.cents(),
            remaining_cents: None,
            status: "unbudgeted".to_string(),
            percent_used: None,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money, PayPeriod, Transaction};
    use crate::services::ledger::LedgerService;
    use crate::services::reconcile::ReconcileService;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_budget_csv() {
        let summary = LedgerService::aggregate(
            &[
                Transaction::expense(Money::from_cents(5000), "Food", date(2024, 3, 5)),
                Transaction::expense(Money::from_cents(1200), "Eating, Out", date(2024, 3, 6)),
            ],
            &PayPeriod::ending_on(date(2024, 3, 15), 14),
        );
        let reconciliation =
            ReconcileService::reconcile(&[Budget::new("Food", Money::from_cents(4000))], &summary).unwrap();

        let mut buffer = Vec::new();
        export_budget_csv(&reconciliation, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "category,budgeted,limit_cents,spent_cents,remaining_cents,status,percent_used"
        );
        assert_eq!(lines[1], "Food,true,4000,5000,-1000,over,125");
        assert_eq!(lines[2], "\"Eating, Out\",false,,1200,,unbudgeted,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_reconciliation() {
        let mut buffer = Vec::new();
        export_budget_csv(&Reconciliation::default(), &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
