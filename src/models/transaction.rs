//! Transaction model
//!
//! A ledger entry is either income or an expense. The amount is always
//! non-negative; the sign is implied by the kind. The engine only reads
//! transactions, never edits them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::CategoryKey;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Invalid transaction kind: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default = "TransactionId::nil", skip_serializing_if = "TransactionId::is_nil")]
    pub id: TransactionId,

    pub kind: TransactionKind,

    /// Amount in minor units, never negative
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    pub occurred_on: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into(),
            occurred_on,
            note: None,
        }
    }

    /// Create an income transaction
    pub fn income(amount: Money, category: impl Into<String>, occurred_on: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, category, occurred_on)
    }

    /// Create an expense transaction
    pub fn expense(amount: Money, category: impl Into<String>, occurred_on: NaiveDate) -> Self {
        Self::new(TransactionKind::Expense, amount, category, occurred_on)
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Normalized category key
    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::new(&self.category)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.occurred_on.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}
