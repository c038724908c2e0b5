//! Layout definitions for the TUI
//!
//! Single vertical stack: summary, notification slot, entry form, expense
//! list, status bar. The notification slot is always reserved so the other
//! regions keep their position when a banner appears.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Budget summary at the top
    pub summary: Rect,
    /// Notification banner slot
    pub banner: Rect,
    /// Expense entry form
    pub form: Rect,
    /// Expense list
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Summary
                Constraint::Length(3), // Notification banner
                Constraint::Length(4), // Expense form
                Constraint::Min(3),    // Expense list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            summary: vertical[0],
            banner: vertical[1],
            form: vertical[2],
            list: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
