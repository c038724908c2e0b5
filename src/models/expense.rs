//! Expense record and its strongly-typed identifier
//!
//! Expenses are immutable once created; the ledger removes and re-adds
//! rather than editing in place.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Money;

/// Unique identifier for an expense
///
/// The newtype keeps expense ids from being confused with other values at
/// compile time. Ids are opaque and carry no ordering or timing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.to_string()[..8])
    }
}

/// A single recorded expense
#[derive(Debug, Clone)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,
    /// What the expense was for
    pub name: String,
    /// How much was spent
    pub amount: Money,
    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id and the current timestamp
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            created_at: Utc::now(),
        }
    }
}
