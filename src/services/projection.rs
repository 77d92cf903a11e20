//! Cash-flow projection service
//!
//! Answers "how much is left until the next payday" for one user by
//! combining the resolved pay period, the period's ledger activity, bills
//! still due before payday, and the budget reconciliation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::{PaydayError, PaydayResult};
use crate::models::{
    CategoryKey, Money, PayPeriod, Transaction, TransactionId, UserId, UserSnapshot,
};
use crate::services::bills::{BillOccurrence, BillService};
use crate::services::ledger::LedgerService;
use crate::services::period::PeriodService;
use crate::services::reconcile::{ReconcileService, Reconciliation};

/// Where the projected income figure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeBasis {
    /// Income recorded in the period
    Actual,
    /// No income recorded yet; the schedule's typical net pay stands in
    Estimated,
}

impl fmt::Display for IncomeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actual => write!(f, "actual"),
            Self::Estimated => write!(f, "estimated"),
        }
    }
}

/// A bill occurrence matched to the expense that paid it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidBill {
    pub occurrence: BillOccurrence,
    pub transaction_id: TransactionId,
    pub paid_on: NaiveDate,
}

/// Projected cash flow for the current pay period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub user_id: UserId,
    pub today: NaiveDate,
    pub period: PayPeriod,
    pub next_payday: NaiveDate,

    /// The stored schedule's payday had passed and was advanced
    pub schedule_stale: bool,

    /// The stored payday is more than one cadence away, so the period has
    /// not started yet
    pub schedule_ahead: bool,

    /// Income actually recorded in the period
    pub income_so_far: Money,
    pub income_basis: IncomeBasis,
    /// Income used for the projection: actual, or the estimate
    pub projected_income: Money,

    pub expense_so_far: Money,

    /// Sum of bill occurrences in the period with no matching expense
    pub bills_remaining: Money,
    pub outstanding_bills: Vec<BillOccurrence>,
    pub paid_bills: Vec<PaidBill>,

    /// `projected_income - expense_so_far - bills_remaining`
    pub projected_balance: Money,

    pub budget_status: Reconciliation,

    /// Days left in the period including today
    pub days_remaining: i64,
    /// Projected balance spread over the remaining days
    pub daily_allowance: Money,
    /// Label of the category with the most spending this period
    pub top_category: Option<String>,
}

impl Projection {
    /// The payday the caller should persist, if the stored one was stale
    pub fn schedule_advance(&self) -> Option<NaiveDate> {
        self.schedule_stale.then_some(self.next_payday)
    }

    pub fn is_income_estimated(&self) -> bool {
        self.income_basis == IncomeBasis::Estimated
    }
}

/// Service for cash-flow projection
pub struct ProjectionService;

impl ProjectionService {
    /// Project one user's cash flow through the next payday
    ///
    /// Fails without partial results when the snapshot is invalid or has no
    /// pay schedule.
    pub fn project(snapshot: &UserSnapshot, today: NaiveDate) -> PaydayResult<Projection> {
        snapshot.validate()?;

        let schedule = snapshot
            .schedule
            .as_ref()
            .ok_or(PaydayError::MissingSchedule {
                user: snapshot.user_id,
            })?;

        let resolved = PeriodService::current_period(schedule, today);
        let period = PayPeriod::new(resolved.period.start, resolved.period.end)?;
        if resolved.is_stale {
            warn!(
                user = %snapshot.user_id,
                stored = %schedule.next_payday,
                advanced = %resolved.next_payday,
                "pay schedule is stale"
            );
        }
        let schedule_ahead = resolved.starts_after(today);
        if schedule_ahead {
            warn!(
                user = %snapshot.user_id,
                %today,
                next_payday = %resolved.next_payday,
                "next payday is more than one cadence away"
            );
        }

        let ledger = LedgerService::aggregate(&snapshot.transactions, &period);
        let (outstanding_bills, paid_bills) = Self::match_bills(snapshot, &period)?;
        let bills_remaining: Money = outstanding_bills.iter().map(|o| o.amount).sum();

        let income_so_far = ledger.total_income;
        let (income_basis, projected_income) = if income_so_far.is_zero() && today < period.end {
            (IncomeBasis::Estimated, schedule.typical_net_pay)
        } else {
            (IncomeBasis::Actual, income_so_far)
        };

        let projected_balance = projected_income - ledger.total_expense - bills_remaining;
        let budget_status = ReconcileService::reconcile(&snapshot.budgets, &ledger)?;

        let days_remaining = PeriodService::days_remaining(&period, today);
        let daily_allowance = projected_balance.per_part(days_remaining);
        let top_category = ledger
            .top_expense_category()
            .map(|(_, totals)| totals.label.clone());

        info!(
            user = %snapshot.user_id,
            %period,
            balance = projected_balance.cents(),
            basis = %income_basis,
            "projected cash flow"
        );

        Ok(Projection {
            user_id: snapshot.user_id,
            today,
            period,
            next_payday: resolved.next_payday,
            schedule_stale: resolved.is_stale,
            schedule_ahead,
            income_so_far,
            income_basis,
            projected_income,
            expense_so_far: ledger.total_expense,
            bills_remaining,
            outstanding_bills,
            paid_bills,
            projected_balance,
            budget_status,
            days_remaining,
            daily_allowance,
            top_category,
        })
    }

    /// Project several users, each independently of the others
    pub fn project_many(
        snapshots: &[UserSnapshot],
        today: NaiveDate,
    ) -> Vec<(UserId, PaydayResult<Projection>)> {
        snapshots
            .iter()
            .map(|snapshot| (snapshot.user_id, Self::project(snapshot, today)))
            .collect()
    }

    /// Split the period's bill occurrences into outstanding and paid
    ///
    /// An occurrence counts as paid when an expense in the period has the
    /// bill's amount and a category or note equal to the bill's name after
    /// normalization. Each expense pays at most one occurrence, and the
    /// number of paid occurrences is the largest any assignment achieves.
    fn match_bills(
        snapshot: &UserSnapshot,
        period: &PayPeriod,
    ) -> PaydayResult<(Vec<BillOccurrence>, Vec<PaidBill>)> {
        let mut occurrences = Vec::new();
        for bill in snapshot.active_bills() {
            occurrences.extend(BillService::occurrences_in_period(bill, period)?);
        }
        occurrences.sort_by(|a, b| a.due_on.cmp(&b.due_on).then_with(|| a.name.cmp(&b.name)));

        let mut expenses: Vec<&Transaction> = snapshot
            .transactions
            .iter()
            .filter(|t| t.is_expense() && period.contains(t.occurred_on))
            .collect();
        expenses.sort_by_key(|t| t.occurred_on);

        let candidates: Vec<Vec<usize>> = occurrences
            .iter()
            .map(|occurrence| {
                let name = CategoryKey::new(&occurrence.name);
                (0..expenses.len())
                    .filter(|&i| expenses[i].amount == occurrence.amount && pays_bill(expenses[i], &name))
                    .collect()
            })
            .collect();

        let mut paid_by: Vec<Option<usize>> = vec![None; expenses.len()];
        for occurrence in 0..occurrences.len() {
            let mut visited = vec![false; expenses.len()];
            assign_payment(occurrence, &candidates, &mut paid_by, &mut visited);
        }

        let mut payment_for = vec![None; occurrences.len()];
        for (txn, occurrence) in paid_by.iter().enumerate() {
            if let Some(occurrence) = occurrence {
                payment_for[*occurrence] = Some(txn);
            }
        }

        let mut outstanding = Vec::new();
        let mut paid = Vec::new();

        for (occurrence, payment) in occurrences.into_iter().zip(payment_for) {
            match payment {
                Some(i) => {
                    debug!(bill = %occurrence.name, due = %occurrence.due_on, txn = %expenses[i].id, "bill matched");
                    paid.push(PaidBill {
                        transaction_id: expenses[i].id,
                        paid_on: expenses[i].occurred_on,
                        occurrence,
                    });
                }
                None => outstanding.push(occurrence),
            }
        }

        Ok((outstanding, paid))
    }
}

fn pays_bill(txn: &Transaction, name: &CategoryKey) -> bool {
    txn.category_key() == *name || txn.note.as_deref().is_some_and(|note| name.matches(note))
}

/// Find a payment for `occurrence`, moving earlier assignments along an
/// augmenting path when its candidates are already taken
fn assign_payment(
    occurrence: usize,
    candidates: &[Vec<usize>],
    paid_by: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &txn in &candidates[occurrence] {
        if visited[txn] {
            continue;
        }
        visited[txn] = true;

        let free = match paid_by[txn] {
            None => true,
            Some(other) => assign_payment(other, candidates, paid_by, visited),
        };
        if free {
            paid_by[txn] = Some(occurrence);
            return true;
        }
    }
    false
}
