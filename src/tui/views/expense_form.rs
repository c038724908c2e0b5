//! Expense entry form
//!
//! The form stays on screen for the whole session: a name field, an amount
//! field, and Enter to submit. Validation runs at submit time and reports
//! the first failing rule: missing fields, then the name pattern, then the
//! amount. A failed submission leaves both the ledger and the form as they
//! were.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Expense, Money};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::labeled_input_line;
use crate::tui::widgets::{Notification, TextInput};

/// Which form field is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
}

/// State for the expense entry form
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Expense name input
    pub name_input: TextInput,
    /// Expense amount input
    pub amount_input: TextInput,
    /// Which field is being edited
    pub focused_field: ExpenseField,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input currently being edited
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Name => &mut self.name_input,
            ExpenseField::Amount => &mut self.amount_input,
        }
    }

    /// Type a character into the focused field
    ///
    /// The amount field only accepts digits and a decimal point; the name
    /// field takes anything and is checked at submit time.
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field {
            ExpenseField::Name => self.name_input.insert(c),
            ExpenseField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount_input.insert(c);
                }
            }
        }
    }

    /// Validate the form, reporting the first failing rule
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name_input.value();
        let amount = self.amount_input.value();

        if name.is_empty() || amount.is_empty() {
            return Err("Both fields are required".to_string());
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        {
            return Err("Invalid expense name".to_string());
        }

        match Money::parse(amount) {
            Ok(parsed) if parsed.is_positive() => Ok(()),
            _ => Err("Invalid amount".to_string()),
        }
    }

    /// Build the expense described by the form
    pub fn build_expense(&self) -> Result<Expense, String> {
        self.validate()?;
        let amount =
            Money::parse(self.amount_input.value()).map_err(|_| "Invalid amount".to_string())?;
        Ok(Expense::new(self.name_input.value(), amount))
    }

    /// Clear both fields and return focus to the name
    pub fn reset(&mut self) {
        self.name_input.clear();
        self.amount_input.clear();
        self.focused_field = ExpenseField::Name;
    }
}

/// Try to record the expense currently described by the form
pub fn submit(app: &mut App) {
    if !app.submission_enabled {
        app.notify(Notification::error("Budget exhausted"));
        return;
    }

    let expense = match app.expense_form.build_expense() {
        Ok(expense) => expense,
        Err(message) => {
            tracing::debug!(reason = %message, "expense rejected");
            app.notify(Notification::error(message));
            return;
        }
    };

    let name = expense.name.clone();
    let amount = expense.amount;
    let (id, remaining, exhausted) = match app.ledger.as_mut() {
        Some(ledger) => {
            let id = ledger.add_expense(expense);
            (id, ledger.remaining(), ledger.is_exhausted())
        }
        None => return,
    };
    tracing::info!(%id, %name, %amount, %remaining, "expense recorded");

    app.notify(Notification::success("Expense added"));

    if exhausted {
        app.alert_exhaustion(remaining);
    }

    app.expense_form.reset();
}

/// Handle a key while the form has focus
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            submit(app);
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            true
        }

        KeyCode::Esc => {
            app.focused_panel = FocusedPanel::List;
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.expense_form.focused_input_mut().clear();
            true
        }

        KeyCode::Char(c) => {
            app.expense_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.expense_form.focused_input_mut().backspace();
            true
        }

        KeyCode::Delete => {
            app.expense_form.focused_input_mut().delete();
            true
        }

        KeyCode::Left => {
            app.expense_form.focused_input_mut().move_left();
            true
        }

        KeyCode::Right => {
            app.expense_form.focused_input_mut().move_right();
            true
        }

        KeyCode::Home => {
            app.expense_form.focused_input_mut().move_start();
            true
        }

        KeyCode::End => {
            app.expense_form.focused_input_mut().move_end();
            true
        }

        _ => false,
    }
}

/// Render the expense entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form_focused = app.focused_panel == FocusedPanel::Form;

    let (title, border_color) = if !app.submission_enabled {
        (" New Expense (disabled) ", Color::DarkGray)
    } else if form_focused {
        (" New Expense ", Color::Cyan)
    } else {
        (" New Expense ", Color::DarkGray)
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let name_focused = form_focused && app.expense_form.focused_field == ExpenseField::Name;
    let amount_focused = form_focused && app.expense_form.focused_field == ExpenseField::Amount;

    let name_line = labeled_input_line("Name  ", "", &app.expense_form.name_input, name_focused);
    let amount_line = labeled_input_line(
        "Amount",
        &app.settings.currency_symbol,
        &app.expense_form.amount_input,
        amount_focused,
    );

    frame.render_widget(Paragraph::new(name_line), chunks[0]);
    frame.render_widget(Paragraph::new(amount_line), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, amount: &str) -> ExpenseFormState {
        let mut state = ExpenseFormState::new();
        for c in name.chars() {
            state.name_input.insert(c);
        }
        for c in amount.chars() {
            state.amount_input.insert(c);
        }
        state
    }

    #[test]
    fn test_both_fields_required() {
        assert_eq!(
            form("", "").validate(),
            Err("Both fields are required".to_string())
        );
        assert_eq!(
            form("Food", "").validate(),
            Err("Both fields are required".to_string())
        );
        assert_eq!(
            form("", "10").validate(),
            Err("Both fields are required".to_string())
        );
    }

    #[test]
    fn test_name_must_be_letters_and_spaces() {
        assert_eq!(
            form("123", "10").validate(),
            Err("Invalid expense name".to_string())
        );
        assert_eq!(
            form("Taxi 4", "10").validate(),
            Err("Invalid expense name".to_string())
        );
        assert!(form("Movie night", "10").validate().is_ok());
    }

    #[test]
    fn test_amount_must_be_positive_number() {
        assert_eq!(
            form("Food", "abc").validate(),
            Err("Invalid amount".to_string())
        );
        assert_eq!(
            form("Food", "0").validate(),
            Err("Invalid amount".to_string())
        );
        assert_eq!(
            form("Food", "-5").validate(),
            Err("Invalid amount".to_string())
        );
        // More digits than i64 cents can hold
        assert_eq!(
            form("Food", "184467440737095517").validate(),
            Err("Invalid amount".to_string())
        );
        assert!(form("Food", "10.50").validate().is_ok());
    }

    #[test]
    fn test_rules_check_in_order() {
        // Bad name and bad amount: the name error wins
        assert_eq!(
            form("123", "abc").validate(),
            Err("Invalid expense name".to_string())
        );
        // Missing amount beats the bad name
        assert_eq!(
            form("123", "").validate(),
            Err("Both fields are required".to_string())
        );
    }

    #[test]
    fn test_build_expense() {
        let expense = form("Food", "30").build_expense().unwrap();
        assert_eq!(expense.name, "Food");
        assert_eq!(expense.amount, Money::from_cents(3_000));
    }

    #[test]
    fn test_amount_field_filters_input() {
        let mut state = ExpenseFormState::new();
        state.focused_field = ExpenseField::Amount;
        for c in "1a2.b5".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount_input.value(), "12.5");
    }

    #[test]
    fn test_reset() {
        let mut state = form("Food", "30");
        state.focused_field = ExpenseField::Amount;
        state.reset();

        assert!(state.name_input.is_empty());
        assert!(state.amount_input.is_empty());
        assert_eq!(state.focused_field, ExpenseField::Name);
    }
}
