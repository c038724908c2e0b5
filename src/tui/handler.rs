//! Event handler for the TUI
//!
//! Routes keyboard events to the budget prompt, the expense form, or the
//! expense list based on the session phase and focused panel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FocusedPanel, SessionPhase};
use super::dialogs;
use super::event::Event;
use super::views::expense_form;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_mouse) => {
            // Keyboard-driven interface
            Ok(())
        }
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.phase() {
        SessionPhase::AwaitingBudget => {
            dialogs::budget::handle_key(app, key);
        }
        SessionPhase::Active => match app.focused_panel {
            FocusedPanel::Form => {
                expense_form::handle_key(app, key);
            }
            FocusedPanel::List => handle_list_key(app, key),
        },
    }

    Ok(())
}

/// Handle keys when the expense list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            let count = app.expense_count();
            app.move_down(count);
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Delete selected expense
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => delete_selected(app),

        // Jump to the form
        KeyCode::Char('a') => app.focus_form(),

        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),

        _ => {}
    }
}

/// Remove the selected expense and refund its amount
fn delete_selected(app: &mut App) {
    let target = app.ledger.as_ref().and_then(|ledger| {
        ledger
            .expenses()
            .get(app.selected_expense)
            .map(|e| (e.id, e.name.clone()))
    });

    let (id, name) = match target {
        Some(t) => t,
        None => return,
    };

    let (removed, remaining) = match app.ledger.as_mut() {
        Some(ledger) => (ledger.remove_expense(id), ledger.remaining()),
        None => return,
    };

    if !removed {
        return;
    }

    tracing::info!(%id, %name, %remaining, "expense removed");

    // Freed budget lifts the submission lock; otherwise re-alert
    if remaining.is_positive() {
        app.submission_enabled = true;
    } else {
        app.alert_exhaustion(remaining);
    }

    app.clamp_selection();
}
