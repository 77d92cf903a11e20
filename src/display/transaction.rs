//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a list of transactions as a register
///
/// Expenses are shown with a leading minus.
pub fn format_transaction_register(transactions: &[&Transaction], symbol: &str, date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            date: txn.occurred_on.format(date_format).to_string(),
            kind: txn.kind.to_string(),
            category: truncate(txn.category.trim(), 20),
            amount: match txn.kind {
                TransactionKind::Income => txn.amount.format_with_symbol(symbol),
                TransactionKind::Expense => (-txn.amount).format_with_symbol(symbol),
            },
            note: txn.note.as_deref().map(|n| truncate(n, 30)).unwrap_or_default(),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}
