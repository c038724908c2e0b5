//! TUI views module
//!
//! Contains the summary panel, expense entry form, expense list, and status
//! bar, plus the top-level render that stacks them.

pub mod expense_form;
pub mod expense_list;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{App, SessionPhase};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationBanner;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);

    if let Some(ref notification) = app.notification {
        frame.render_widget(NotificationBanner::new(notification), layout.banner);
    }

    expense_form::render(frame, app, layout.form);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    // The budget prompt overlays everything until a budget is set
    if app.phase() == SessionPhase::AwaitingBudget {
        dialogs::budget::render(frame, app);
    }
}
