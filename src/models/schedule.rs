//! Pay schedule model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How often the user is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    /// Every 14 days
    #[default]
    BiWeekly,
}

impl PayFrequency {
    /// Length of one pay period in days
    pub const fn cadence_days(&self) -> i64 {
        match self {
            Self::BiWeekly => 14,
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BiWeekly => write!(f, "biweekly"),
        }
    }
}

/// A user's pay cadence
///
/// `next_payday` is the stored value; it may be stale relative to "today".
/// Advancing it is computed by the engine but applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySchedule {
    #[serde(default)]
    pub frequency: PayFrequency,

    pub next_payday: NaiveDate,

    /// Usual take-home pay per period, used when no income has landed yet
    #[serde(default)]
    pub typical_net_pay: Money,
}

impl PaySchedule {
    /// Create a biweekly schedule
    pub fn biweekly(next_payday: NaiveDate, typical_net_pay: Money) -> Self {
        Self {
            frequency: PayFrequency::BiWeekly,
            next_payday,
            typical_net_pay,
        }
    }

    pub fn cadence_days(&self) -> i64 {
        self.frequency.cadence_days()
    }
}
