//! Chat and notification surfaces.
//!
//! The editor never prints. It posts [`ChatMessage`]s (a permanent record of
//! rolls and completions) and [`Notification`]s (transient feedback such as
//! errors) to whatever [`Notifier`] it was given. [`MessageLog`] keeps both in
//! memory, which is all a terminal front end or a test needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message for the shared chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who the message is attributed to.
    pub speaker: String,
    /// Message body.
    pub content: String,
    /// When it was posted.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// A message stamped with the current time.
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Something happened.
    Info,
    /// Something looks off but the operation went through.
    Warning,
    /// The operation was rejected.
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Transient feedback for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity.
    pub level: NoticeLevel,
    /// Localized message text.
    pub message: String,
}

impl Notification {
    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// A warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// Receives chat messages and notifications from the editor.
pub trait Notifier {
    /// Post to the chat log.
    fn chat(&mut self, message: ChatMessage);

    /// Show a notification.
    fn notify(&mut self, notification: Notification);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn chat(&mut self, message: ChatMessage) {
        (**self).chat(message);
    }

    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// In-memory chat log and notification list.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    chats: Vec<ChatMessage>,
    notices: Vec<Notification>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All chat messages, oldest first.
    pub fn chats(&self) -> &[ChatMessage] {
        &self.chats
    }

    /// All notifications, oldest first.
    pub fn notices(&self) -> &[Notification] {
        &self.notices
    }

    /// The most recent error notification.
    pub fn last_error(&self) -> Option<&Notification> {
        self.notices
            .iter()
            .rev()
            .find(|n| n.level == NoticeLevel::Error)
    }

    /// Whether nothing has been posted.
    pub fn is_empty(&self) -> bool {
        self.chats.is_empty() && self.notices.is_empty()
    }
}

impl Notifier for MessageLog {
    fn chat(&mut self, message: ChatMessage) {
        self.chats.push(message);
    }

    fn notify(&mut self, notification: Notification) {
        self.notices.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_collects_both_streams() {
        let mut log = MessageLog::new();
        assert!(log.is_empty());
        log.chat(ChatMessage::new("GM", "hello"));
        log.notify(Notification::info("saved"));
        assert_eq!(log.chats().len(), 1);
        assert_eq!(log.chats()[0].speaker, "GM");
        assert_eq!(log.notices().len(), 1);
        assert!(!log.is_empty());
    }

    #[test]
    fn last_error_skips_other_levels() {
        let mut log = MessageLog::new();
        assert!(log.last_error().is_none());
        log.notify(Notification::error("first"));
        log.notify(Notification::error("second"));
        log.notify(Notification::info("later"));
        log.notify(Notification::warning("odd"));
        assert_eq!(log.last_error().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn borrowed_notifier_writes_through() {
        let mut log = MessageLog::new();
        {
            let mut n: &mut MessageLog = &mut log;
            Notifier::notify(&mut n, Notification::error("boom"));
        }
        assert_eq!(log.notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn level_display() {
        assert_eq!(NoticeLevel::Info.to_string(), "info");
        assert_eq!(NoticeLevel::Warning.to_string(), "warning");
        assert_eq!(NoticeLevel::Error.to_string(), "error");
    }
}
