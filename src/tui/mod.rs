//! Terminal User Interface module
//!
//! Single-screen budget session built on ratatui: summary panel, expense
//! entry form, expense list, and a modal budget prompt at startup.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
