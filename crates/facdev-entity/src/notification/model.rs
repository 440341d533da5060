//! Notification entity model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use facdev_core::types::{NotificationId, UserId};

use super::severity::Severity;

/// A notification to be delivered to a user.
///
/// Notifications are append-only; the single permitted mutation flips
/// the `read` flag to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Visual severity.
    pub severity: Severity,
    /// Whether the user has read this notification.
    pub read: bool,
    /// When the notification was created, in epoch milliseconds.
    pub created_at: i64,
}

impl Notification {
    /// Creates an unread notification stamped with the current time.
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: NotificationId::random(),
            user_id,
            title: title.into(),
            message: message.into(),
            severity,
            read: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notifications_start_unread() {
        let n = Notification::new(
            UserId::from("u1"),
            "Activity Submitted",
            "Your workshop has been submitted for review.",
            Severity::Success,
        );
        assert!(n.is_unread());
        assert!(n.created_at > 0);
    }
}
