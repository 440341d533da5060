//! Notification repository implementation.

use std::sync::Arc;

use facdev_core::result::AppResult;
use facdev_core::traits::datastore::{Document, DocumentStore, Watch, to_document};
use facdev_core::types::filter::FieldFilter;
use facdev_core::types::{NotificationId, UserId};
use facdev_entity::notification::Notification;

use super::decode_all;

/// Collection holding notifications.
pub const COLLECTION: &str = "notifications";

/// Repository for notification records.
#[derive(Clone)]
pub struct NotificationRepository {
    store: Arc<dyn DocumentStore>,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Append a notification.
    pub async fn create(&self, notification: &Notification) -> AppResult<()> {
        let doc = to_document(notification)?;
        self.store
            .set(COLLECTION, notification.id.as_str(), doc)
            .await
    }

    /// Point read by identifier.
    pub async fn find(&self, id: &NotificationId) -> AppResult<Option<Notification>> {
        match self.store.get(COLLECTION, id.as_str()).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    /// List a user's notifications, newest first.
    pub async fn list_by_user(&self, user_id: &UserId) -> AppResult<Vec<Notification>> {
        let docs = self
            .store
            .query(COLLECTION, &[FieldFilter::eq("user_id", user_id.as_str())])
            .await?;
        let mut notifications: Vec<Notification> = decode_all(docs)?;
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    /// Count a user's unread notifications.
    pub async fn count_unread(&self, user_id: &UserId) -> AppResult<usize> {
        let docs = self
            .store
            .query(
                COLLECTION,
                &[
                    FieldFilter::eq("user_id", user_id.as_str()),
                    FieldFilter::eq("read", false),
                ],
            )
            .await?;
        Ok(docs.len())
    }

    /// Flip the read flag of a notification to true.
    pub async fn mark_read(&self, id: &NotificationId) -> AppResult<()> {
        let mut patch = Document::new();
        patch.insert("read".to_string(), serde_json::Value::Bool(true));
        self.store.update(COLLECTION, id.as_str(), patch).await
    }

    /// Live subscription to all of a user's notifications.
    pub async fn watch_for_user(&self, user_id: &UserId) -> AppResult<Watch> {
        self.store
            .watch(
                COLLECTION,
                vec![FieldFilter::eq("user_id", user_id.as_str())],
            )
            .await
    }
}
