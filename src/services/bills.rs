//! Recurring bill service
//!
//! Turns a bill's nominal `due_day` into concrete due dates. Months shorter
//! than the due day clamp to their last day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PaydayError, PaydayResult};
use crate::models::{BillId, Money, PayPeriod, RecurringBill};

/// A bill falling due on a concrete date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOccurrence {
    pub bill_id: BillId,
    pub name: String,
    pub amount: Money,
    pub due_on: NaiveDate,
}

impl BillOccurrence {
    fn of(bill: &RecurringBill, due_on: NaiveDate) -> Self {
        Self {
            bill_id: bill.id,
            name: bill.name.clone(),
            amount: bill.amount,
            due_on,
        }
    }
}

/// Service for resolving bill due dates
pub struct BillService;

impl BillService {
    /// The bill's due date in the given month
    ///
    /// Activity is not checked; callers filter inactive bills first.
    pub fn occurrence_in_month(bill: &RecurringBill, year: i32, month: u32) -> PaydayResult<NaiveDate> {
        if !(1..=12).contains(&month) {
            return Err(PaydayError::Validation(format!("Invalid month: {}", month)));
        }

        let day = bill.due_day.clamp(1, days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            PaydayError::Validation(format!("Invalid date: {:04}-{:02}-{:02}", year, month, day))
        })
    }

    /// Occurrences of the bill that fall inside the period
    pub fn occurrences_in_period(bill: &RecurringBill, period: &PayPeriod) -> PaydayResult<Vec<BillOccurrence>> {
        let mut occurrences = Vec::new();

        for (year, month) in months_overlapping(period) {
            let due_on = Self::occurrence_in_month(bill, year, month)?;
            if period.contains(due_on) {
                occurrences.push(BillOccurrence::of(bill, due_on));
            }
        }

        Ok(occurrences)
    }

    /// The first due date on or after `date`
    pub fn next_occurrence(bill: &RecurringBill, date: NaiveDate) -> PaydayResult<NaiveDate> {
        let this_month = Self::occurrence_in_month(bill, date.year(), date.month())?;
        if this_month >= date {
            return Ok(this_month);
        }

        let (year, month) = next_month(date.year(), date.month());
        Self::occurrence_in_month(bill, year, month)
    }

    /// Active bills next due on or after `today` and before `until`
    ///
    /// Ordered by due date, then by name.
    pub fn upcoming(bills: &[RecurringBill], today: NaiveDate, until: NaiveDate) -> PaydayResult<Vec<BillOccurrence>> {
        let mut upcoming = Vec::new();

        for bill in bills.iter().filter(|b| b.active) {
            let due_on = Self::next_occurrence(bill, today)?;
            if due_on < until {
                upcoming.push(BillOccurrence::of(bill, due_on));
            }
        }

        upcoming.sort_by(|a, b| a.due_on.cmp(&b.due_on).then_with(|| a.name.cmp(&b.name)));
        Ok(upcoming)
    }
}

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Every (year, month) touched by the period
fn months_overlapping(period: &PayPeriod) -> Vec<(i32, u32)> {
    let last = period.last_day();
    let mut months = Vec::new();
    let mut current = (period.start.year(), period.start.month());

    while current <= (last.year(), last.month()) {
        months.push(current);
        current = next_month(current.0, current.1);
    }

    months
}
