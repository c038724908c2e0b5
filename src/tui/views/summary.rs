//! Budget summary panel
//!
//! Shows the total budget and the remaining balance. The remaining value and
//! the panel border take the severity color, recomputed every frame.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Severity;
use crate::tui::app::App;

/// Color for a severity band
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

/// Render the budget summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;

    let (lines, color) = match app.ledger.as_ref() {
        Some(ledger) => {
            let severity = ledger.severity();
            let color = severity_color(severity);

            let mut remaining_spans = vec![
                Span::styled("Remaining: ", Style::default().fg(Color::White)),
                Span::styled(
                    ledger.remaining().format_with_symbol(symbol),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ];
            if severity != Severity::Normal {
                remaining_spans.push(Span::styled(
                    format!("  {}", severity.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
            }

            let lines = vec![
                Line::from(vec![
                    Span::styled("Budget:    ", Style::default().fg(Color::White)),
                    Span::styled(
                        ledger.total_budget().format_with_symbol(symbol),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(remaining_spans),
            ];
            (lines, color)
        }
        None => {
            let lines = vec![
                Line::from(Span::styled(
                    "Budget:    -",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "Remaining: -",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            (lines, Color::DarkGray)
        }
    };

    let block = Block::default()
        .title(" Budget ")
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
