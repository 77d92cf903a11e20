//! Recurring bill display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::RecurringBill;

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "Bill")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due day")]
    due_day: u32,
    #[tabled(rename = "Next due")]
    next_due: String,
    #[tabled(rename = "Active")]
    active: String,
}

/// Format bills alongside their next due date
pub fn format_bill_list(
    bills: &[(&RecurringBill, Option<chrono::NaiveDate>)],
    symbol: &str,
    date_format: &str,
) -> String {
    if bills.is_empty() {
        return "No bills found.\n".to_string();
    }

    let rows: Vec<BillRow> = bills
        .iter()
        .map(|(bill, next_due)| BillRow {
            name: bill.name.clone(),
            amount: bill.amount.format_with_symbol(symbol),
            due_day: bill.due_day,
            next_due: next_due
                .map(|d| d.format(date_format).to_string())
                .unwrap_or_else(|| "-".to_string()),
            active: if bill.active { "yes" } else { "no" }.to_string(),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}
