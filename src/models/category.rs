//! Category labels and their normalized matching key
//!
//! Transactions, budgets and bills carry free-text category labels with no
//! structural link between them. Every comparison goes through
//! [`CategoryKey`], which folds case and whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered to new users
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Rent",
    "Groceries",
    "Transit",
    "Tuition",
    "Textbooks",
    "Phone",
    "Subscriptions",
    "Eating Out",
    "Coffee",
    "Entertainment",
    "Other",
];

/// A normalized category label
///
/// Leading and trailing whitespace is removed, internal whitespace runs are
/// collapsed to a single space, and the result is lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(label: &str) -> Self {
        let normalized = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the label normalized to nothing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether a raw label normalizes to this key
    pub fn matches(&self, label: &str) -> bool {
        *self == Self::new(label)
    }
}

impl From<&str> for CategoryKey {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
