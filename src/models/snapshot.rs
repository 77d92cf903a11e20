//! One user's records as handed to the engine
//!
//! The storage layer translates its rows into a `UserSnapshot`; the engine
//! re-validates it at the boundary rather than trusting upstream constraints.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::bill::RecurringBill;
use super::budget::Budget;
use super::ids::UserId;
use super::money::Money;
use super::schedule::PaySchedule;
use super::transaction::Transaction;
use crate::error::{PaydayError, PaydayResult};

/// Everything the engine needs to project one user's cash flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    #[serde(default = "UserId::nil", skip_serializing_if = "UserId::is_nil")]
    pub user_id: UserId,

    #[serde(default)]
    pub schedule: Option<PaySchedule>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub bills: Vec<RecurringBill>,
}

impl UserSnapshot {
    /// Create an empty snapshot for a user
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn with_schedule(mut self, schedule: PaySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_budgets(mut self, budgets: Vec<Budget>) -> Self {
        self.budgets = budgets;
        self
    }

    pub fn with_bills(mut self, bills: Vec<RecurringBill>) -> Self {
        self.bills = bills;
        self
    }

    /// Bills that take part in projection
    pub fn active_bills(&self) -> impl Iterator<Item = &RecurringBill> {
        self.bills.iter().filter(|b| b.active)
    }

    /// Check amounts, due days and budget uniqueness
    ///
    /// A missing schedule is not a validation failure here; only projection
    /// requires one.
    pub fn validate(&self) -> PaydayResult<()> {
        if let Some(schedule) = &self.schedule {
            ensure_non_negative("PaySchedule", self.user_id.to_string(), schedule.typical_net_pay)?;
        }

        for txn in &self.transactions {
            ensure_non_negative("Transaction", txn.id.to_string(), txn.amount)?;
        }

        for bill in &self.bills {
            ensure_non_negative("RecurringBill", &bill.name, bill.amount)?;
            if !bill.has_valid_due_day() {
                return Err(PaydayError::Validation(format!(
                    "Bill '{}' has due day {}, expected 1-31",
                    bill.name, bill.due_day
                )));
            }
        }

        validate_budgets(&self.budgets)?;
        self.ensure_total_in_range()
    }

    /// Bound the combined magnitude of every amount so derived totals stay exact
    fn ensure_total_in_range(&self) -> PaydayResult<()> {
        let amounts = self
            .schedule
            .iter()
            .map(|s| s.typical_net_pay)
            .chain(self.transactions.iter().map(|t| t.amount))
            .chain(self.budgets.iter().map(|b| b.limit))
            .chain(self.bills.iter().map(|b| b.amount));

        let mut total = Money::zero();
        for amount in amounts {
            total = total
                .checked_add(amount)
                .filter(|t| *t <= Money::MAX_INPUT_TOTAL)
                .ok_or_else(|| {
                    PaydayError::Validation(format!(
                        "Amounts for user {} exceed the supported total of {}",
                        self.user_id,
                        Money::MAX_INPUT_TOTAL
                    ))
                })?;
        }
        Ok(())
    }
}

/// Reject negative limits and budgets sharing a normalized category
pub fn validate_budgets(budgets: &[Budget]) -> PaydayResult<()> {
    let mut seen = HashSet::new();
    for budget in budgets {
        ensure_non_negative("Budget", &budget.category, budget.limit)?;
        if !seen.insert(budget.category_key()) {
            return Err(PaydayError::Validation(format!(
                "Duplicate budget for category '{}'",
                budget.category
            )));
        }
    }
    Ok(())
}

fn ensure_non_negative(
    entity: &'static str,
    identifier: impl Into<String>,
    amount: Money,
) -> PaydayResult<()> {
    if amount.is_negative() {
        return Err(PaydayError::negative_amount(entity, identifier, amount.cents()));
    }
    Ok(())
}
