//! Reusable TUI widgets
//!
//! Building blocks shared by views and dialogs: text inputs and the
//! notification banner.

pub mod input;
pub mod notification;

pub use input::TextInput;
pub use notification::{Notification, NotificationBanner, NotificationKind};
