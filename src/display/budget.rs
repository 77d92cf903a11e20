//! Budget reconciliation display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage};
use crate::models::BudgetStatus;
use crate::services::reconcile::Reconciliation;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render the reconciliation as a table followed by unbudgeted spending
///
/// Lines at or past `near_limit_percent` but still under are marked "near".
pub fn format_budget_table(reconciliation: &Reconciliation, symbol: &str, near_limit_percent: u8) -> String {
    if reconciliation.lines.is_empty() && reconciliation.unbudgeted.is_empty() {
        return "No budgets or spending this period.\n".to_string();
    }

    let mut output = String::new();

    if !reconciliation.lines.is_empty() {
        let rows: Vec<BudgetRow> = reconciliation
            .lines
            .iter()
            .map(|line| {
                let status = match line.status {
                    BudgetStatus::Under if line.is_near_limit(near_limit_percent) => "near".to_string(),
                    other => other.to_string(),
                };
                BudgetRow {
                    category: line.category.clone(),
                    limit: line.limit.format_with_symbol(symbol),
                    spent: line.spent.format_with_symbol(symbol),
                    remaining: line.remaining.format_with_symbol(symbol),
                    used: format!("{} {}", format_bar(line.percent_used, 10), format_percentage(line.percent_used)),
                    status,
                }
            })
            .collect();

        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
        output.push_str(&format!(
            "Total: {} of {} spent\n",
            reconciliation.total_spent().format_with_symbol(symbol),
            reconciliation.total_limit().format_with_symbol(symbol)
        ));
    }

    if !reconciliation.unbudgeted.is_empty() {
        output.push_str("\nUnbudgeted spending:\n");
        for spend in &reconciliation.unbudgeted {
            output.push_str(&format!(
                "  {:20} {:>12}\n",
                spend.category,
                spend.spent.format_with_symbol(symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money, PayPeriod, Transaction};
    use crate::services::ledger::LedgerService;
    use crate::services::reconcile::ReconcileService;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_budget_table() {
        let summary = LedgerService::aggregate(
            &[
                Transaction::expense(Money::from_cents(5000), "Food", date(5)),
                Transaction::expense(Money::from_cents(3400), "Transit", date(6)),
                Transaction::expense(Money::from_cents(999), "Hobbies", date(7)),
            ],
            &PayPeriod::ending_on(date(15), 14),
        );
        let budgets = vec![
            Budget::new("Food", Money::from_cents(4000)),
            Budget::new("Transit", Money::from_cents(4000)),
        ];
        let reconciliation = ReconcileService::reconcile(&budgets, &summary).unwrap();

        let output = format_budget_table(&reconciliation, "$", 80);
        assert!(output.contains("Category"));
        assert!(output.contains("-$10.00"));
        assert!(output.contains("over"));
        assert!(output.contains("near"));
        assert!(output.contains("Total: $84.00 of $80.00 spent"));
        assert!(output.contains("Hobbies"));
        assert!(output.contains("$9.99"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_budget_table(&Reconciliation::default(), "$", 80);
        assert_eq!(output, "No budgets or spending this period.\n");
    }
}
