//! Expense list view
//!
//! Table of recorded expenses in insertion order, with a selection marker
//! used by the delete action.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Expense;
use crate::tui::app::{App, FocusedPanel};

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::List;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expense_count()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let expenses: &[Expense] = match app.ledger.as_ref() {
        Some(ledger) => ledger.expenses(),
        None => &[],
    };

    if expenses.is_empty() {
        let empty = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ]);

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let (name, amount) = row_cells(expense, symbol);
            Row::new(vec![
                Cell::from(name).style(Style::default().fg(Color::White)),
                Cell::from(amount).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(10),    // Name
        Constraint::Length(12), // Amount
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Build the display cells for one expense row
fn row_cells(expense: &Expense, symbol: &str) -> (String, String) {
    (
        expense.name.clone(),
        expense.amount.format_with_symbol(symbol),
    )
}
