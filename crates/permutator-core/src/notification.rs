//! Transient user notifications.
//!
//! Only one notification is visible at a time. Each call to
//! [`Notifications::show`] issues a fresh [`NotificationId`]; the caller
//! schedules [`Notifications::expire`] with that id after
//! [`NOTIFICATION_TIMEOUT`]. A dismissal scheduled for an older notification
//! finds a different id and does nothing, so a stale timer can never hide a
//! newer message.

use std::time::Duration;

use tracing::debug;

/// How long a notification stays visible.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Kind of notification, which decides its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A user action completed.
    Success,
    /// A user action failed.
    Error,
}

/// Identifies one shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier of this notification.
    pub id: NotificationId,
    /// Success or error.
    pub kind: NotificationKind,
    /// Text to display.
    pub message: String,
}

impl Notification {
    /// Returns true for error notifications.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Holds the currently visible notification, if any.
#[derive(Debug, Default)]
pub struct Notifications {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifications {
    /// Creates an empty notification slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing any visible one.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let message = message.into();
        debug!(?id, ?kind, %message, "Showing notification");
        self.current = Some(Notification { id, kind, message });
        id
    }

    /// Shows a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Success, message)
    }

    /// Shows an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Error, message)
    }

    /// Clears the notification if `id` is still the visible one.
    ///
    /// Returns true if something was cleared.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            debug!(?id, "Notification expired");
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Clears whatever notification is visible.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The visible notification.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut notifications = Notifications::new();
        let id = notifications.success("Done");
        assert_eq!(notifications.current().unwrap().message, "Done");
        assert!(notifications.expire(id));
        assert!(notifications.current().is_none());
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut notifications = Notifications::new();
        let id = notifications.error("Oops");
        assert!(notifications.expire(id));
        assert!(!notifications.expire(id));
        assert!(notifications.current().is_none());
    }

    #[test]
    fn test_stale_expiry_keeps_newer_notification() {
        let mut notifications = Notifications::new();
        let first = notifications.error("Invalid input");
        let second = notifications.success("Emails copied to clipboard!");
        assert_ne!(first, second);

        assert!(!notifications.expire(first));
        let current = notifications.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.kind, NotificationKind::Success);
        assert!(!current.is_error());

        assert!(notifications.expire(second));
    }

    #[test]
    fn test_clear_early() {
        let mut notifications = Notifications::new();
        let id = notifications.success("Done");
        notifications.clear();
        assert!(notifications.current().is_none());
        assert!(!notifications.expire(id));
    }

    #[test]
    fn test_timeout_is_two_seconds() {
        assert_eq!(NOTIFICATION_TIMEOUT, Duration::from_secs(2));
    }
}
