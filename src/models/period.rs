//! Pay period representation
//!
//! A pay period is the half-open date range `[start, end)` between two
//! successive paydays. The payday itself belongs to the period it opens.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PaydayError, PaydayResult};

/// Half-open date range between two paydays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// The payday closing the period (exclusive)
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Create a period, rejecting empty or inverted ranges
    pub fn new(start: NaiveDate, end: NaiveDate) -> PaydayResult<Self> {
        if start >= end {
            return Err(PaydayError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The period of `cadence_days` ending on `payday`
    pub fn ending_on(payday: NaiveDate, cadence_days: i64) -> Self {
        Self {
            start: payday - Duration::days(cadence_days),
            end: payday,
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of days in the period
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Last day that still belongs to the period
    pub fn last_day(&self) -> NaiveDate {
        self.end - Duration::days(1)
    }

    /// Get the next period of the same length
    pub fn next(&self) -> Self {
        let len = Duration::days(self.len_days());
        Self {
            start: self.end,
            end: self.end + len,
        }
    }

    /// Get the previous period of the same length
    pub fn prev(&self) -> Self {
        let len = Duration::days(self.len_days());
        Self {
            start: self.start - len,
            end: self.start,
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Ord for PayPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for PayPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The current period for a schedule as seen from a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPeriod {
    pub period: PayPeriod,

    /// The payday that closes `period`; differs from the stored value when
    /// the stored schedule was stale
    pub next_payday: NaiveDate,

    /// Whether the stored `next_payday` had already passed
    pub is_stale: bool,
}

impl ResolvedPeriod {
    /// Whether the stored payday is more than one cadence away, leaving
    /// `today` before the period begins
    pub fn starts_after(&self, today: NaiveDate) -> bool {
        today < self.period.start
    }
}
