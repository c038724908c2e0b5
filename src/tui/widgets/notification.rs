//! Transient notification banner
//!
//! Feedback messages for the user: success or error, auto-dismissed after a
//! fixed duration. The app keeps at most one notification at a time; showing
//! a new one replaces the old one along with its dismissal deadline.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Default time a notification stays on screen
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Confirmation of an accepted action
    Success,
    /// Rejected input or an exhausted budget
    Error,
}

impl NotificationKind {
    /// Get the color for this notification kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Error => "x",
        }
    }

    /// Get the title for this notification kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A transient feedback message
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was shown (for auto-dismiss)
    pub created_at: Instant,
    /// How long to keep it on screen
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Set the display duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification in the banner slot
pub struct NotificationBanner<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationBanner<'a> {
    /// Create a new banner for a notification
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationBanner<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();
        let icon = self.notification.kind.icon();
        let title = self.notification.kind.title();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .block(block);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Expense added");
        assert_eq!(n.message, "Expense added");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_notification_kinds() {
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Error.color(), Color::Red);
        assert_eq!(NotificationKind::Error.title(), "Error");
    }

    #[test]
    fn test_expiry() {
        let fresh = Notification::error("nope");
        assert!(!fresh.is_expired());

        let instant = Notification::error("gone").with_duration(Duration::ZERO);
        assert!(instant.is_expired());
    }
}
