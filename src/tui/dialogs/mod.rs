//! Dialog modules for the TUI
//!
//! Modal dialogs rendered over the main layout

pub mod budget;

pub use budget::BudgetPromptState;
