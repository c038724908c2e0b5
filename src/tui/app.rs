//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the session ledger, focus, form states, and the notification slot.

use std::time::Duration;

use crate::config::settings::Settings;
use crate::error::TallyResult;
use crate::models::{Ledger, Money};

use super::dialogs::budget::BudgetPromptState;
use super::views::expense_form::{ExpenseField, ExpenseFormState};
use super::widgets::Notification;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No budget yet; the budget prompt is up
    AwaitingBudget,
    /// Budget set; expenses can be recorded
    Active,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    List,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// The session ledger, present once a budget has been set
    pub ledger: Option<Ledger>,

    /// Whether new expenses may be submitted
    pub submission_enabled: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Expense entry form state
    pub expense_form: ExpenseFormState,

    /// Initial budget prompt state
    pub budget_prompt: BudgetPromptState,

    /// Selected expense index in the list
    pub selected_expense: usize,

    /// The current notification, if one is showing
    pub notification: Option<Notification>,
}

impl<'a> App<'a> {
    /// Create a new App instance awaiting its budget
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            should_quit: false,
            ledger: None,
            submission_enabled: false,
            focused_panel: FocusedPanel::default(),
            expense_form: ExpenseFormState::new(),
            budget_prompt: BudgetPromptState::new(),
            selected_expense: 0,
            notification: None,
        }
    }

    /// Create an App with the budget already set
    pub fn with_budget(settings: &'a Settings, total: Money) -> TallyResult<Self> {
        let mut app = Self::new(settings);
        app.activate(total)?;
        Ok(app)
    }

    /// Current phase of the session
    pub fn phase(&self) -> SessionPhase {
        if self.ledger.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::AwaitingBudget
        }
    }

    /// Start the session with the given total budget
    pub fn activate(&mut self, total: Money) -> TallyResult<()> {
        let ledger = Ledger::new(total)?;
        tracing::info!(budget = %ledger.total_budget(), "session started");

        self.ledger = Some(ledger);
        self.submission_enabled = true;
        self.focused_panel = FocusedPanel::Form;
        Ok(())
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a notification, replacing any current one
    ///
    /// Replacement also drops the previous dismissal deadline, so a
    /// superseded message never blanks its successor.
    pub fn notify(&mut self, notification: Notification) {
        let duration = Duration::from_secs(self.settings.notification_secs);
        self.notification = Some(notification.with_duration(duration));
    }

    /// Alert that the budget is used up and lock the form
    ///
    /// Runs after any ledger mutation that leaves remaining at or below
    /// zero, including removals that do not free enough budget.
    pub fn alert_exhaustion(&mut self, remaining: Money) {
        tracing::warn!(%remaining, "budget exhausted, submissions locked");
        self.notify(Notification::error("Budget exhausted"));
        self.submission_enabled = false;
    }

    /// Advance time-based state; called on every tick
    pub fn tick(&mut self) {
        let expired = self
            .notification
            .as_ref()
            .map(|n| n.is_expired())
            .unwrap_or(false);
        if expired {
            self.notification = None;
        }
    }

    /// Number of expenses in the ledger
    pub fn expense_count(&self) -> usize {
        self.ledger.as_ref().map(|l| l.expense_count()).unwrap_or(0)
    }

    /// Move the list selection up
    pub fn move_up(&mut self) {
        if self.selected_expense > 0 {
            self.selected_expense -= 1;
        }
    }

    /// Move the list selection down
    pub fn move_down(&mut self, max: usize) {
        if self.selected_expense < max.saturating_sub(1) {
            self.selected_expense += 1;
        }
    }

    /// Keep the selection inside the list after a removal
    pub fn clamp_selection(&mut self) {
        let max = self.expense_count();
        self.selected_expense = self.selected_expense.min(max.saturating_sub(1));
    }

    /// Move focus forward: name field, amount field, then the list
    pub fn focus_next(&mut self) {
        match self.focused_panel {
            FocusedPanel::Form => match self.expense_form.focused_field {
                ExpenseField::Name => self.expense_form.focused_field = ExpenseField::Amount,
                ExpenseField::Amount => self.focused_panel = FocusedPanel::List,
            },
            FocusedPanel::List => self.focus_form(),
        }
    }

    /// Move focus backward through the same cycle
    pub fn focus_prev(&mut self) {
        match self.focused_panel {
            FocusedPanel::Form => match self.expense_form.focused_field {
                ExpenseField::Name => self.focused_panel = FocusedPanel::List,
                ExpenseField::Amount => self.expense_form.focused_field = ExpenseField::Name,
            },
            FocusedPanel::List => {
                self.focused_panel = FocusedPanel::Form;
                self.expense_form.focused_field = ExpenseField::Amount;
            }
        }
    }

    /// Jump to the form with the name field focused
    pub fn focus_form(&mut self) {
        self.focused_panel = FocusedPanel::Form;
        self.expense_form.focused_field = ExpenseField::Name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn test_starts_awaiting_budget() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert_eq!(app.phase(), SessionPhase::AwaitingBudget);
        assert!(!app.submission_enabled);
    }

    #[test]
    fn test_activate_transitions_to_active() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.activate(Money::from_cents(10_000)).unwrap();

        assert_eq!(app.phase(), SessionPhase::Active);
        assert!(app.submission_enabled);
        assert_eq!(
            app.ledger.as_ref().unwrap().total_budget(),
            Money::from_cents(10_000)
        );
    }

    #[test]
    fn test_activate_rejects_non_positive_budget() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        assert!(app.activate(Money::zero()).is_err());
        assert_eq!(app.phase(), SessionPhase::AwaitingBudget);
    }

    #[test]
    fn test_notify_replaces_current_notification() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.notify(Notification::success("first"));
        app.notify(Notification::error("second"));

        let current = app.notification.as_ref().unwrap();
        assert_eq!(current.message, "second");
    }

    #[test]
    fn test_tick_clears_expired_notification() {
        let mut settings = Settings::default();
        settings.notification_secs = 0;
        let mut app = App::new(&settings);

        app.notify(Notification::success("gone soon"));
        app.tick();

        assert!(app.notification.is_none());
    }

    #[test]
    fn test_tick_keeps_live_notification() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.notify(Notification::success("still here"));
        app.tick();

        assert!(app.notification.is_some());
    }

    #[test]
    fn test_focus_cycle() {
        let settings = Settings::default();
        let mut app = App::with_budget(&settings, Money::from_cents(10_000)).unwrap();

        assert_eq!(app.focused_panel, FocusedPanel::Form);
        assert_eq!(app.expense_form.focused_field, ExpenseField::Name);

        app.focus_next();
        assert_eq!(app.expense_form.focused_field, ExpenseField::Amount);

        app.focus_next();
        assert_eq!(app.focused_panel, FocusedPanel::List);

        app.focus_next();
        assert_eq!(app.focused_panel, FocusedPanel::Form);
        assert_eq!(app.expense_form.focused_field, ExpenseField::Name);

        app.focus_prev();
        assert_eq!(app.focused_panel, FocusedPanel::List);
    }

    #[test]
    fn test_selection_movement_and_clamp() {
        let settings = Settings::default();
        let mut app = App::with_budget(&settings, Money::from_cents(10_000)).unwrap();

        let ledger = app.ledger.as_mut().unwrap();
        ledger.add_expense(Expense::new("a", Money::from_cents(100)));
        ledger.add_expense(Expense::new("b", Money::from_cents(100)));
        let last = ledger.add_expense(Expense::new("c", Money::from_cents(100)));

        app.move_down(3);
        app.move_down(3);
        app.move_down(3);
        assert_eq!(app.selected_expense, 2);

        app.ledger.as_mut().unwrap().remove_expense(last);
        app.clamp_selection();
        assert_eq!(app.selected_expense, 1);

        app.move_up();
        assert_eq!(app.selected_expense, 0);
        app.move_up();
        assert_eq!(app.selected_expense, 0);
    }
}
