//! Status bar view
//!
//! Shows the spent total, expense count, and context-sensitive key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel, SessionPhase};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    match app.ledger.as_ref() {
        Some(ledger) => {
            spans.push(Span::styled(" Spent: ", Style::default().fg(Color::White)));
            spans.push(Span::styled(
                ledger
                    .spent()
                    .format_with_symbol(&app.settings.currency_symbol),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" │ "));

            let count = ledger.expense_count();
            let label = if count == 1 { "expense" } else { "expenses" };
            spans.push(Span::styled(
                format!("{} {}", count, label),
                Style::default().fg(Color::Cyan),
            ));

            if !app.submission_enabled {
                spans.push(Span::raw(" │ "));
                spans.push(Span::styled(
                    " BUDGET EXHAUSTED ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
        None => {
            spans.push(Span::styled(
                " Set a budget to begin",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    // Key hints (right-aligned)
    let hints = match app.phase() {
        SessionPhase::AwaitingBudget => " Enter:Start  Esc:Quit ",
        SessionPhase::Active => match app.focused_panel {
            FocusedPanel::Form => " Tab:Next field  Enter:Add  Esc:List ",
            FocusedPanel::List => " j/k:Move  d:Delete  a:Add  q:Quit ",
        },
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len + hints.chars().count())
        .max(1);
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
