//! Recurring bill model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKey;
use super::ids::BillId;
use super::money::Money;

/// A monthly obligation due on a nominal day of the month
///
/// `due_day` may exceed the length of a given month (e.g. 31 in April); the
/// concrete due date is resolved per month by `BillService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringBill {
    #[serde(default = "BillId::nil", skip_serializing_if = "BillId::is_nil")]
    pub id: BillId,

    pub name: String,

    pub amount: Money,

    /// Nominal day of month, 1-31
    pub due_day: u32,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl RecurringBill {
    /// Create an active bill
    pub fn new(name: impl Into<String>, amount: Money, due_day: u32) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            due_day,
            active: true,
        }
    }

    /// Normalized bill name, used to match paying transactions
    pub fn name_key(&self) -> CategoryKey {
        CategoryKey::new(&self.name)
    }

    pub fn has_valid_due_day(&self) -> bool {
        (1..=31).contains(&self.due_day)
    }
}

impl fmt::Display for RecurringBill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (day {})", self.name, self.amount, self.due_day)?;
        if !self.active {
            write!(f, " [inactive]")?;
        }
        Ok(())
    }
}
