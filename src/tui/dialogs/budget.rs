//! Initial budget prompt
//!
//! Modal dialog shown at startup until a valid budget is entered. Invalid
//! input keeps the dialog open with an inline error. Esc abandons the
//! session since nothing works without a budget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::labeled_input_line;
use crate::tui::widgets::TextInput;

/// State for the initial budget prompt
#[derive(Debug, Clone, Default)]
pub struct BudgetPromptState {
    /// Budget amount input
    pub amount_input: TextInput,
    /// Inline validation error
    pub error_message: Option<String>,
}

impl BudgetPromptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type a character; only digits and a decimal point make sense here
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.amount_input.insert(c);
            self.error_message = None;
        }
    }

    pub fn backspace(&mut self) {
        self.amount_input.backspace();
        self.error_message = None;
    }

    pub fn clear(&mut self) {
        self.amount_input.clear();
        self.error_message = None;
    }

    /// Parse and validate the entered budget
    pub fn parse_amount(&self) -> Result<Money, String> {
        if self.amount_input.is_empty() {
            return Err("Budget is required".to_string());
        }
        match Money::parse(self.amount_input.value()) {
            Ok(amount) if amount.is_positive() => Ok(amount),
            _ => Err("Enter a number greater than zero".to_string()),
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Handle key events for the budget prompt
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.quit();
            true
        }

        KeyCode::Enter => {
            if let Err(e) = start_session(app) {
                app.budget_prompt.set_error(e);
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_prompt.clear();
            true
        }

        KeyCode::Char(c) => {
            app.budget_prompt.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.budget_prompt.backspace();
            true
        }

        KeyCode::Left => {
            app.budget_prompt.amount_input.move_left();
            true
        }

        KeyCode::Right => {
            app.budget_prompt.amount_input.move_right();
            true
        }

        KeyCode::Home => {
            app.budget_prompt.amount_input.move_start();
            true
        }

        KeyCode::End => {
            app.budget_prompt.amount_input.move_end();
            true
        }

        _ => false,
    }
}

fn start_session(app: &mut App) -> Result<(), String> {
    let amount = app.budget_prompt.parse_amount()?;

    app.activate(amount)
        .map_err(|_| "Enter a number greater than zero".to_string())?;

    app.budget_prompt = BudgetPromptState::new();

    Ok(())
}

/// Render the budget prompt
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.budget_prompt;

    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Your Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let prompt = Line::from(Span::styled(
        "How much can you spend this session?",
        Style::default().fg(Color::White),
    ));
    frame.render_widget(Paragraph::new(prompt), chunks[0]);

    let input_line = labeled_input_line(
        "Budget",
        &app.settings.currency_symbol,
        &state.amount_input,
        true,
    );
    frame.render_widget(Paragraph::new(input_line), chunks[2]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Start  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}
