//! In-memory ledger for a budgeting session
//!
//! The ledger owns the expense sequence and keeps the remaining balance in
//! step with it: after every mutation, remaining = total budget minus the sum
//! of all expense amounts. Nothing here is ever persisted; a session starts
//! fresh every run.

use crate::error::{TallyError, TallyResult};

use super::{Expense, ExpenseId, Money, Severity};

/// A session's budget and the expenses recorded against it
#[derive(Debug, Clone)]
pub struct Ledger {
    /// The budget fixed at session start
    total_budget: Money,
    /// What is left after all recorded expenses
    remaining: Money,
    /// Recorded expenses in insertion order
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create a ledger with the given total budget
    ///
    /// The budget must be strictly positive.
    pub fn new(total_budget: Money) -> TallyResult<Self> {
        if !total_budget.is_positive() {
            return Err(TallyError::validation("budget must be greater than zero"));
        }

        Ok(Self {
            total_budget,
            remaining: total_budget,
            expenses: Vec::new(),
        })
    }

    /// The budget fixed at session start
    pub fn total_budget(&self) -> Money {
        self.total_budget
    }

    /// What is left of the budget (negative when overdrawn)
    pub fn remaining(&self) -> Money {
        self.remaining
    }

    /// All recorded expenses, oldest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up a single expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Sum of all recorded expense amounts
    pub fn spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Record an expense and return its id
    ///
    /// The ledger accepts any expense it is given; input validation happens
    /// before an `Expense` is constructed.
    pub fn add_expense(&mut self, expense: Expense) -> ExpenseId {
        let id = expense.id;
        self.expenses.push(expense);
        self.recompute_remaining();
        id
    }

    /// Remove the expense with the given id
    ///
    /// Returns whether anything was removed; an unknown id leaves the ledger
    /// unchanged.
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);

        let removed = self.expenses.len() != before;
        if removed {
            self.recompute_remaining();
        }
        removed
    }

    /// Whether the budget is used up (remaining at or below zero)
    pub fn is_exhausted(&self) -> bool {
        !self.remaining.is_positive()
    }

    /// Severity of the current remaining balance
    pub fn severity(&self) -> Severity {
        Severity::classify(self.remaining, self.total_budget)
    }

    fn recompute_remaining(&mut self) {
        self.remaining = self.total_budget - self.spent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(cents: i64) -> Ledger {
        Ledger::new(Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_new_ledger() {
        let ledger = ledger(10_000);
        assert_eq!(ledger.total_budget().cents(), 10_000);
        assert_eq!(ledger.remaining().cents(), 10_000);
        assert_eq!(ledger.expense_count(), 0);
    }

    #[test]
    fn test_new_rejects_non_positive_budget() {
        assert!(Ledger::new(Money::zero()).is_err());
        assert!(Ledger::new(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_add_expense_updates_remaining() {
        let mut ledger = ledger(10_000);
        ledger.add_expense(Expense::new("Food", Money::from_cents(3_000)));

        assert_eq!(ledger.remaining().cents(), 7_000);
        assert_eq!(ledger.spent().cents(), 3_000);
        assert_eq!(ledger.expense_count(), 1);
        assert_eq!(ledger.expenses()[0].name, "Food");
    }

    #[test]
    fn test_expenses_keep_insertion_order() {
        let mut ledger = ledger(10_000);
        ledger.add_expense(Expense::new("First", Money::from_cents(100)));
        ledger.add_expense(Expense::new("Second", Money::from_cents(200)));
        ledger.add_expense(Expense::new("Third", Money::from_cents(300)));

        let names: Vec<&str> = ledger.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_remove_expense() {
        let mut ledger = ledger(10_000);
        let keep = ledger.add_expense(Expense::new("Keep", Money::from_cents(1_000)));
        let drop = ledger.add_expense(Expense::new("Drop", Money::from_cents(2_500)));

        assert!(ledger.remove_expense(drop));
        assert_eq!(ledger.remaining().cents(), 9_000);
        assert_eq!(ledger.expense_count(), 1);
        assert!(ledger.expense(keep).is_some());
        assert!(ledger.expense(drop).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let mut ledger = ledger(10_000);
        ledger.add_expense(Expense::new("Food", Money::from_cents(3_000)));

        assert!(!ledger.remove_expense(ExpenseId::new()));
        assert_eq!(ledger.remaining().cents(), 7_000);
        assert_eq!(ledger.expense_count(), 1);
    }

    #[test]
    fn test_remaining_invariant_across_mutations() {
        let mut ledger = ledger(50_000);
        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(ledger.add_expense(Expense::new("x", Money::from_cents(i * 1_000))));
        }
        ledger.remove_expense(ids[1]);
        ledger.remove_expense(ids[3]);
        ledger.add_expense(Expense::new("y", Money::from_cents(700)));

        assert_eq!(
            ledger.remaining(),
            ledger.total_budget() - ledger.spent()
        );
        assert_eq!(ledger.remaining().cents(), 50_000 - 9_000 - 700);
    }

    #[test]
    fn test_overdraft_goes_negative() {
        let mut ledger = ledger(1_000);
        ledger.add_expense(Expense::new("Big", Money::from_cents(1_500)));

        assert_eq!(ledger.remaining().cents(), -500);
        assert!(ledger.is_exhausted());
        assert_eq!(ledger.severity(), Severity::Danger);
    }

    #[test]
    fn test_exact_exhaustion() {
        let mut ledger = ledger(1_000);
        ledger.add_expense(Expense::new("All of it", Money::from_cents(1_000)));

        assert_eq!(ledger.remaining().cents(), 0);
        assert!(ledger.is_exhausted());
    }

    #[test]
    fn test_huge_expenses_do_not_wrap_the_totals() {
        let mut ledger = ledger(10_000);
        ledger.add_expense(Expense::new("Huge", Money::from_cents(i64::MAX)));
        ledger.add_expense(Expense::new("Huger", Money::from_cents(i64::MAX)));

        assert_eq!(ledger.spent().cents(), i64::MAX);
        assert!(ledger.remaining().is_negative());
        assert!(ledger.is_exhausted());
        assert_eq!(ledger.severity(), Severity::Danger);
    }

    #[test]
    fn test_severity_follows_remaining() {
        let mut ledger = ledger(10_000);
        assert_eq!(ledger.severity(), Severity::Normal);

        ledger.add_expense(Expense::new("a", Money::from_cents(6_000)));
        assert_eq!(ledger.severity(), Severity::Warning);

        ledger.add_expense(Expense::new("b", Money::from_cents(2_000)));
        assert_eq!(ledger.severity(), Severity::Danger);
    }
}
