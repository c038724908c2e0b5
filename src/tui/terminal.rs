//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::models::Money;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// With `initial_budget` the session starts active; otherwise the budget
/// prompt is shown first.
pub fn run_tui(settings: &Settings, initial_budget: Option<Money>) -> Result<()> {
    // Build app state before touching the terminal so a bad budget
    // fails with a readable error
    let mut app = match initial_budget {
        Some(total) => App::with_budget(settings, total)?,
        None => App::new(settings),
    };

    let mut terminal = init_terminal()?;
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    // Main event loop
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(())
}
