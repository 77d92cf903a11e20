//! Budget reconciliation service
//!
//! Compares a period's spending per category with the user's budget limits.
//! Spending in categories without a budget is reported, not dropped.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::PaydayResult;
use crate::models::snapshot::validate_budgets;
use crate::models::{Budget, BudgetStatus, CategoryKey, Money};
use crate::services::ledger::LedgerSummary;

/// Default percentage of a limit at which a category counts as near it
pub const DEFAULT_NEAR_LIMIT_PERCENT: u8 = 80;

/// One budget's standing for the period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// The budget's own label
    pub category: String,
    pub key: CategoryKey,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative once the limit is exceeded
    pub remaining: Money,
    pub status: BudgetStatus,
    /// Share of the limit spent, floored
    pub percent_used: i64,
}

impl BudgetLine {
    fn new(budget: &Budget, spent: Money) -> Self {
        let remaining = budget.limit - spent;
        Self {
            category: budget.category.trim().to_string(),
            key: budget.category_key(),
            limit: budget.limit,
            spent,
            remaining,
            status: BudgetStatus::from_remaining(remaining),
            percent_used: spent.percent_of(budget.limit),
        }
    }

    /// Still under the limit but at or past `threshold` percent of it
    pub fn is_near_limit(&self, threshold: u8) -> bool {
        self.status == BudgetStatus::Under && self.percent_used >= i64::from(threshold)
    }
}

/// Spending in a category that has no budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbudgetedSpend {
    pub category: String,
    pub key: CategoryKey,
    pub spent: Money,
}

/// Result of reconciling budgets against a period's spending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Budget lines, largest spend first
    pub lines: Vec<BudgetLine>,
    /// Categories with spending but no budget, largest spend first
    pub unbudgeted: Vec<UnbudgetedSpend>,
}

impl Reconciliation {
    pub fn total_limit(&self) -> Money {
        self.lines.iter().map(|l| l.limit).sum()
    }

    /// Spending across budgeted categories
    pub fn total_spent(&self) -> Money {
        self.lines.iter().map(|l| l.spent).sum()
    }

    pub fn total_unbudgeted(&self) -> Money {
        self.unbudgeted.iter().map(|u| u.spent).sum()
    }

    /// Lines whose limit has been exceeded
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetLine> {
        self.lines.iter().filter(|l| l.status == BudgetStatus::Over)
    }

    /// Lines still under but close to their limit
    pub fn near_limit(&self, threshold: u8) -> impl Iterator<Item = &BudgetLine> {
        self.lines.iter().filter(move |l| l.is_near_limit(threshold))
    }

    /// Look up a line by raw category label
    pub fn line_for(&self, category: &str) -> Option<&BudgetLine> {
        let key = CategoryKey::new(category);
        self.lines.iter().find(|l| l.key == key)
    }
}

/// Service for budget reconciliation
pub struct ReconcileService;

impl ReconcileService {
    /// Reconcile budgets against the expense side of a ledger summary
    pub fn reconcile(budgets: &[Budget], summary: &LedgerSummary) -> PaydayResult<Reconciliation> {
        validate_budgets(budgets)?;

        let mut lines: Vec<BudgetLine> = budgets
            .iter()
            .map(|budget| BudgetLine::new(budget, summary.expense_for(&budget.category_key())))
            .collect();
        lines.sort_by(|a, b| by_spend_then_name(a.spent, &a.category, b.spent, &b.category));

        let budgeted: HashSet<&CategoryKey> = lines.iter().map(|l| &l.key).collect();
        let mut unbudgeted: Vec<UnbudgetedSpend> = summary
            .by_category
            .iter()
            .filter(|(key, totals)| totals.expense.is_positive() && !budgeted.contains(key))
            .map(|(key, totals)| UnbudgetedSpend {
                category: totals.label.clone(),
                key: key.clone(),
                spent: totals.expense,
            })
            .collect();
        unbudgeted.sort_by(|a, b| by_spend_then_name(a.spent, &a.category, b.spent, &b.category));

        Ok(Reconciliation { lines, unbudgeted })
    }
}

fn by_spend_then_name(a_spent: Money, a_name: &str, b_spent: Money, b_name: &str) -> Ordering {
    b_spent.cmp(&a_spent).then_with(|| a_name.cmp(b_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaydayError;
    use crate::models::{PayPeriod, Transaction};
    use crate::services::ledger::LedgerService;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summary_of(transactions: &[Transaction]) -> LedgerSummary {
        LedgerService::aggregate(transactions, &PayPeriod::ending_on(date(2024, 3, 15), 14))
    }

    #[test]
    fn test_overspent_category() {
        let summary = summary_of(&[Transaction::expense(
            Money::from_cents(5000),
            "Food",
            date(2024, 3, 5),
        )]);
        let budgets = vec![Budget::new("Food", Money::from_cents(4000))];

        let result = ReconcileService::reconcile(&budgets, &summary).unwrap();
        let food = &result.lines[0];

        assert_eq!(food.spent.cents(), 5000);
        assert_eq!(food.remaining.cents(), -1000);
        assert_eq!(food.status, BudgetStatus::Over);
        assert_eq!(food.percent_used, 125);
        assert_eq!(result.over_budget().count(), 1);
    }

    #[test]
    fn test_sign_law() {
        let summary = summary_of(&[
            Transaction::expense(Money::from_cents(3000), "Coffee", date(2024, 3, 2)),
            Transaction::expense(Money::from_cents(2500), "Transit", date(2024, 3, 3)),
            Transaction::expense(Money::from_cents(100), "Phone", date(2024, 3, 4)),
        ]);
        let budgets = vec![
            Budget::new("Coffee", Money::from_cents(3000)),
            Budget::new("Transit", Money::from_cents(2000)),
            Budget::new("Phone", Money::from_cents(4500)),
            Budget::new("Rent", Money::zero()),
        ];

        let result = ReconcileService::reconcile(&budgets, &summary).unwrap();
        for line in &result.lines {
            assert_eq!(line.remaining, line.limit - line.spent);
            assert_eq!(line.status == BudgetStatus::Over, line.remaining.is_negative());
        }
        assert_eq!(result.line_for("coffee").unwrap().status, BudgetStatus::At);
        assert_eq!(result.line_for("Rent").unwrap().status, BudgetStatus::At);
        assert_eq!(result.line_for("Phone").unwrap().status, BudgetStatus::Under);
    }

    #[test]
    fn test_ordering_by_spend_then_name() {
        let summary = summary_of(&[
            Transaction::expense(Money::from_cents(1000), "Coffee", date(2024, 3, 2)),
            Transaction::expense(Money::from_cents(5000), "Rent", date(2024, 3, 3)),
            Transaction::expense(Money::from_cents(1000), "Books", date(2024, 3, 4)),
        ]);
        let budgets = vec![
            Budget::new("Coffee", Money::from_cents(2000)),
            Budget::new("Transit", Money::from_cents(2000)),
            Budget::new("Rent", Money::from_cents(90000)),
            Budget::new("Books", Money::from_cents(2000)),
        ];

        let result = ReconcileService::reconcile(&budgets, &summary).unwrap();
        let order: Vec<_> = result.lines.iter().map(|l| l.category.as_str()).collect();
        assert_eq!(order, vec!["Rent", "Books", "Coffee", "Transit"]);
    }

    #[test]
    fn test_unbudgeted_spend_reported() {
        let summary = summary_of(&[
            Transaction::expense(Money::from_cents(1200), "Entertainment", date(2024, 3, 2)),
            Transaction::expense(Money::from_cents(800), "coffee", date(2024, 3, 2)),
            Transaction::expense(Money::from_cents(800), "Food", date(2024, 3, 3)),
            Transaction::income(Money::from_cents(5000), "Gift", date(2024, 3, 4)),
        ]);
        let budgets = vec![Budget::new(" FOOD ", Money::from_cents(4000))];

        let result = ReconcileService::reconcile(&budgets, &summary).unwrap();
        assert_eq!(result.lines[0].spent.cents(), 800);

        let unbudgeted: Vec<_> = result.unbudgeted.iter().map(|u| u.category.as_str()).collect();
        assert_eq!(unbudgeted, vec!["Entertainment", "coffee"]);
        assert_eq!(result.total_unbudgeted().cents(), 2000);
    }

    #[test]
    fn test_near_limit() {
        let summary = summary_of(&[Transaction::expense(
            Money::from_cents(3200),
            "Groceries",
            date(2024, 3, 5),
        )]);
        let budgets = vec![Budget::new("Groceries", Money::from_cents(4000))];

        let result = ReconcileService::reconcile(&budgets, &summary).unwrap();
        assert!(result.lines[0].is_near_limit(DEFAULT_NEAR_LIMIT_PERCENT));
        assert!(!result.lines[0].is_near_limit(90));
        assert_eq!(result.near_limit(80).count(), 1);
    }

    #[test]
    fn test_no_budgets_no_spend() {
        let result = ReconcileService::reconcile(&[], &summary_of(&[])).unwrap();
        assert!(result.lines.is_empty());
        assert!(result.unbudgeted.is_empty());
        assert_eq!(result.total_limit(), Money::zero());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let budgets = vec![Budget::new("Food", Money::from_cents(-1))];
        let err = ReconcileService::reconcile(&budgets, &summary_of(&[])).unwrap_err();
        assert!(matches!(err, PaydayError::NegativeAmount { entity: "Budget", .. }));
    }
}
