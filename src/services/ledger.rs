//! Ledger aggregation service
//!
//! Sums income and expense over a pay period, grouped by normalized category,
//! and lists transactions with simple filters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{CategoryKey, Money, PayPeriod, Transaction, TransactionKind};

/// Default cap on listed transactions
pub const DEFAULT_TRANSACTION_LIMIT: usize = 200;

/// Income and expense totals for one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// First label seen for the category, for display
    pub label: String,
    pub income: Money,
    pub expense: Money,
    /// Number of transactions folded in
    pub count: usize,
}

impl CategoryTotals {
    fn add(&mut self, txn: &Transaction) {
        if self.label.is_empty() {
            self.label = txn.category.trim().to_string();
        }
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expense += txn.amount,
        }
        self.count += 1;
    }

    fn absorb(&mut self, other: &CategoryTotals) {
        if self.label.is_empty() {
            self.label = other.label.clone();
        }
        self.income += other.income;
        self.expense += other.expense;
        self.count += other.count;
    }
}

/// Aggregated ledger activity over a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub range: PayPeriod,
    pub total_income: Money,
    pub total_expense: Money,
    pub transaction_count: usize,
    pub by_category: BTreeMap<CategoryKey, CategoryTotals>,
}

impl LedgerSummary {
    /// An empty summary over a range
    pub fn empty(range: PayPeriod) -> Self {
        Self {
            range,
            total_income: Money::zero(),
            total_expense: Money::zero(),
            transaction_count: 0,
            by_category: BTreeMap::new(),
        }
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Expense total for a category, zero if it saw no activity
    pub fn expense_for(&self, key: &CategoryKey) -> Money {
        self.by_category
            .get(key)
            .map(|totals| totals.expense)
            .unwrap_or_default()
    }

    /// The category with the largest expense total, ties broken by key
    pub fn top_expense_category(&self) -> Option<(&CategoryKey, &CategoryTotals)> {
        self.by_category
            .iter()
            .filter(|(_, totals)| totals.expense.is_positive())
            .min_by(|(ka, a), (kb, b)| b.expense.cmp(&a.expense).then_with(|| ka.cmp(kb)))
    }

    /// Combine with a summary over another range
    ///
    /// The resulting range spans both. Summaries over disjoint ranges merge
    /// to the same totals as one aggregation over their union.
    pub fn merge(mut self, other: &LedgerSummary) -> Self {
        self.range = PayPeriod {
            start: self.range.start.min(other.range.start),
            end: self.range.end.max(other.range.end),
        };
        self.total_income += other.total_income;
        self.total_expense += other.total_expense;
        self.transaction_count += other.transaction_count;

        for (key, totals) in &other.by_category {
            self.by_category.entry(key.clone()).or_default().absorb(totals);
        }

        self
    }
}

/// Filter for listing transactions
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    /// Smallest amount to include
    pub min_amount: Option<Money>,
    pub limit: usize,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            kind: None,
            category: None,
            min_amount: None,
            limit: DEFAULT_TRANSACTION_LIMIT,
        }
    }
}

/// Service for ledger aggregation
pub struct LedgerService;

impl LedgerService {
    /// Aggregate transactions dated within `[range.start, range.end)`
    pub fn aggregate(transactions: &[Transaction], range: &PayPeriod) -> LedgerSummary {
        let mut summary = LedgerSummary::empty(*range);

        for txn in transactions.iter().filter(|t| range.contains(t.occurred_on)) {
            match txn.kind {
                TransactionKind::Income => summary.total_income += txn.amount,
                TransactionKind::Expense => summary.total_expense += txn.amount,
            }
            summary.transaction_count += 1;
            summary
                .by_category
                .entry(txn.category_key())
                .or_default()
                .add(txn);
        }

        debug!(
            %range,
            matched = summary.transaction_count,
            total = transactions.len(),
            "aggregated ledger"
        );

        summary
    }

    /// Transactions matching the filter, newest first
    ///
    /// Same-day entries list the later-recorded one first.
    pub fn filter<'a>(transactions: &'a [Transaction], filter: &TransactionFilter) -> Vec<&'a Transaction> {
        let category = filter.category.as_deref().map(CategoryKey::new);

        let mut matched: Vec<(usize, &Transaction)> = transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| filter.kind.map_or(true, |kind| t.kind == kind))
            .filter(|(_, t)| category.as_ref().map_or(true, |key| key.matches(&t.category)))
            .filter(|(_, t)| filter.min_amount.map_or(true, |min| t.amount >= min))
            .collect();

        matched.sort_by(|(ai, a), (bi, b)| b.occurred_on.cmp(&a.occurred_on).then_with(|| bi.cmp(ai)));
        matched.truncate(filter.limit);
        matched.into_iter().map(|(_, t)| t).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_period() -> PayPeriod {
        PayPeriod::ending_on(date(2024, 3, 15), 14)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::income(Money::from_cents(200000), "Paycheck", date(2024, 3, 1)),
            Transaction::expense(Money::from_cents(5000), "Food", date(2024, 3, 5)),
            Transaction::expense(Money::from_cents(1500), " food ", date(2024, 3, 9)),
            Transaction::expense(Money::from_cents(90000), "Rent", date(2024, 3, 14)),
            // Outside the period on both sides
            Transaction::expense(Money::from_cents(700), "Coffee", date(2024, 2, 29)),
            Transaction::expense(Money::from_cents(800), "Coffee", date(2024, 3, 15)),
        ]
    }

    #[test]
    fn test_aggregate_totals() {
        let summary = LedgerService::aggregate(&sample(), &march_period());

        assert_eq!(summary.total_income.cents(), 200000);
        assert_eq!(summary.total_expense.cents(), 96500);
        assert_eq!(summary.transaction_count, 4);
        assert_eq!(summary.net().cents(), 103500);
    }

    #[test]
    fn test_aggregate_groups_normalized_categories() {
        let summary = LedgerService::aggregate(&sample(), &march_period());

        let food = &summary.by_category[&CategoryKey::new("FOOD")];
        assert_eq!(food.expense.cents(), 6500);
        assert_eq!(food.count, 2);
        assert_eq!(food.label, "Food");
        assert!(!summary.by_category.contains_key(&CategoryKey::new("Coffee")));
        assert_eq!(summary.expense_for(&CategoryKey::new("Coffee")), Money::zero());
    }

    #[test]
    fn test_aggregate_empty() {
        let summary = LedgerService::aggregate(&[], &march_period());
        assert_eq!(summary, LedgerSummary::empty(march_period()));
        assert!(summary.top_expense_category().is_none());
    }

    #[test]
    fn test_additivity_over_split_ranges() {
        let transactions = sample();
        let whole = PayPeriod::new(date(2024, 2, 20), date(2024, 3, 20)).unwrap();
        let first = PayPeriod::new(date(2024, 2, 20), date(2024, 3, 6)).unwrap();
        let second = PayPeriod::new(date(2024, 3, 6), date(2024, 3, 20)).unwrap();

        let merged = LedgerService::aggregate(&transactions, &first)
            .merge(&LedgerService::aggregate(&transactions, &second));
        let direct = LedgerService::aggregate(&transactions, &whole);

        assert_eq!(merged.total_income, direct.total_income);
        assert_eq!(merged.total_expense, direct.total_expense);
        assert_eq!(merged.transaction_count, direct.transaction_count);
        assert_eq!(merged.range, direct.range);
        for (key, totals) in &direct.by_category {
            assert_eq!(merged.by_category[key].income, totals.income);
            assert_eq!(merged.by_category[key].expense, totals.expense);
            assert_eq!(merged.by_category[key].count, totals.count);
        }
        assert_eq!(merged.by_category.len(), direct.by_category.len());
    }

    #[test]
    fn test_top_expense_category() {
        let summary = LedgerService::aggregate(&sample(), &march_period());
        let (key, totals) = summary.top_expense_category().unwrap();
        assert_eq!(key.as_str(), "rent");
        assert_eq!(totals.expense.cents(), 90000);
    }

    #[test]
    fn test_top_expense_category_tie_breaks_by_key() {
        let transactions = vec![
            Transaction::expense(Money::from_cents(100), "Transit", date(2024, 3, 2)),
            Transaction::expense(Money::from_cents(100), "Coffee", date(2024, 3, 3)),
        ];
        let summary = LedgerService::aggregate(&transactions, &march_period());
        assert_eq!(summary.top_expense_category().unwrap().0.as_str(), "coffee");
    }

    #[test]
    fn test_filter_by_kind_and_category() {
        let transactions = sample();

        let expenses = LedgerService::filter(
            &transactions,
            &TransactionFilter {
                kind: Some(TransactionKind::Expense),
                ..Default::default()
            },
        );
        assert_eq!(expenses.len(), 5);
        assert_eq!(expenses[0].occurred_on, date(2024, 3, 15));
        assert_eq!(expenses[4].occurred_on, date(2024, 2, 29));

        let food = LedgerService::filter(
            &transactions,
            &TransactionFilter {
                category: Some("FOOD".into()),
                ..Default::default()
            },
        );
        assert_eq!(food.len(), 2);
    }

    #[test]
    fn test_filter_limit() {
        let transactions = sample();
        let limited = LedgerService::filter(
            &transactions,
            &TransactionFilter {
                limit: 2,
                ..Default::default()
            },
        );
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].occurred_on, date(2024, 3, 15));
        assert_eq!(limited[1].occurred_on, date(2024, 3, 14));
    }

    #[test]
    fn test_filter_same_day_order_follows_input() {
        let transactions = vec![
            Transaction::expense(Money::from_cents(100), "Coffee", date(2024, 3, 5)),
            Transaction::expense(Money::from_cents(200), "Lunch", date(2024, 3, 5)),
            Transaction::expense(Money::from_cents(300), "Dinner", date(2024, 3, 5)),
        ];
        for _ in 0..3 {
            let listed = LedgerService::filter(&transactions, &TransactionFilter::default());
            let categories: Vec<&str> = listed.iter().map(|t| t.category.as_str()).collect();
            assert_eq!(categories, vec!["Dinner", "Lunch", "Coffee"]);
        }
    }

    #[test]
    fn test_filter_min_amount() {
        let transactions = sample();
        let large = LedgerService::filter(
            &transactions,
            &TransactionFilter {
                min_amount: Some(Money::from_cents(5000)),
                ..Default::default()
            },
        );
        assert_eq!(large.len(), 3);
        assert!(large.iter().all(|t| t.amount.cents() >= 5000));
    }
}
