//! Budget limit model
//!
//! A budget is a recurring per-period spending ceiling for one category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKey;
use super::ids::BudgetId;
use super::money::Money;

/// A per-category spending limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default = "BudgetId::nil", skip_serializing_if = "BudgetId::is_nil")]
    pub id: BudgetId,

    /// Category label; unique per user after normalization
    pub category: String,

    /// Ceiling per pay period, in minor units
    pub limit: Money,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
        }
    }

    /// Normalized category key
    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::new(&self.category)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}

/// Where a category stands against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Headroom left
    Under,
    /// Exactly at the limit
    At,
    /// Limit exceeded
    Over,
}

impl BudgetStatus {
    /// Classify a remaining amount
    pub fn from_remaining(remaining: Money) -> Self {
        if remaining.is_positive() {
            Self::Under
        } else if remaining.is_zero() {
            Self::At
        } else {
            Self::Over
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "under"),
            Self::At => write!(f, "at"),
            Self::Over => write!(f, "over"),
        }
    }
}
