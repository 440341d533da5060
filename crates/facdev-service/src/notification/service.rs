//! Notification feed operations.

use std::sync::Arc;

use facdev_core::error::AppError;
use facdev_core::traits::datastore::Watch;
use facdev_core::types::{NotificationId, UserId};
use facdev_datastore::repositories::notification::NotificationRepository;
use facdev_entity::notification::{Notification, Severity};

use crate::context::SessionContext;

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Creates a notification for a target user.
    pub async fn notify(
        &self,
        target: &UserId,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Result<Notification, AppError> {
        let notification = Notification::new(target.clone(), title, message, severity);
        self.notification_repo.create(&notification).await?;
        Ok(notification)
    }

    /// Lists the current user's notifications, newest first.
    pub async fn list(&self, ctx: &SessionContext) -> Result<Vec<Notification>, AppError> {
        self.notification_repo.list_by_user(&ctx.user_id).await
    }

    /// Counts the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &SessionContext) -> Result<usize, AppError> {
        self.notification_repo.count_unread(&ctx.user_id).await
    }

    /// Marks a notification as read. Unknown identifiers and
    /// notifications belonging to another user are ignored.
    pub async fn mark_read(
        &self,
        ctx: &SessionContext,
        id: &NotificationId,
    ) -> Result<(), AppError> {
        let Some(notification) = self.notification_repo.find(id).await? else {
            return Ok(());
        };
        if notification.user_id != ctx.user_id {
            return Ok(());
        }
        self.notification_repo.mark_read(id).await
    }

    /// Opens a live query over the current user's notifications.
    pub async fn watch(&self, ctx: &SessionContext) -> Result<Watch, AppError> {
        self.notification_repo.watch_for_user(&ctx.user_id).await
    }
}
