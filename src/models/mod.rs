//! Core data models for tally
//!
//! This module contains the data structures that represent the budgeting
//! domain: money amounts, expenses, the session ledger, and severity grading.

pub mod expense;
pub mod ledger;
pub mod money;
pub mod severity;

pub use expense::{Expense, ExpenseId};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use severity::Severity;
