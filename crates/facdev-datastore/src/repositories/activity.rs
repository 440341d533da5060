//! Activity repository implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use facdev_core::result::AppResult;
use facdev_core::traits::datastore::{Document, DocumentStore, Watch, to_document};
use facdev_core::types::filter::FieldFilter;
use facdev_core::types::{ActivityId, UserId};
use facdev_entity::activity::{Activity, ActivityStatus};

use super::decode_all;

/// Collection holding activity submissions.
pub const COLLECTION: &str = "activities";

/// Repository for activity records.
#[derive(Clone)]
pub struct ActivityRepository {
    store: Arc<dyn DocumentStore>,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a freshly submitted activity under its own identifier.
    pub async fn create(&self, activity: &Activity) -> AppResult<()> {
        let doc = to_document(activity)?;
        self.store.set(COLLECTION, activity.id.as_str(), doc).await
    }

    /// Point read by identifier.
    pub async fn find(&self, id: &ActivityId) -> AppResult<Option<Activity>> {
        match self.store.get(COLLECTION, id.as_str()).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    /// List a user's activities, newest first.
    pub async fn list_by_user(&self, user_id: &UserId) -> AppResult<Vec<Activity>> {
        let docs = self
            .store
            .query(COLLECTION, &[FieldFilter::eq("user_id", user_id.as_str())])
            .await?;
        let mut activities: Vec<Activity> = decode_all(docs)?;
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(activities)
    }

    /// List every activity, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Activity>> {
        let docs = self.store.query(COLLECTION, &[]).await?;
        let mut activities: Vec<Activity> = decode_all(docs)?;
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(activities)
    }

    /// Record a review decision on an activity.
    pub async fn record_review(
        &self,
        id: &ActivityId,
        status: ActivityStatus,
        reviewer: &UserId,
        comment: &str,
        reviewed_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut patch = Document::new();
        patch.insert("status".to_string(), serde_json::to_value(status)?);
        patch.insert("reviewed_by".to_string(), serde_json::to_value(reviewer)?);
        patch.insert("reviewed_at".to_string(), serde_json::to_value(reviewed_at)?);
        patch.insert(
            "review_comment".to_string(),
            serde_json::Value::String(comment.to_string()),
        );
        self.store.update(COLLECTION, id.as_str(), patch).await
    }

    /// Replace the evidence URL list of an activity.
    pub async fn set_evidence_urls(&self, id: &ActivityId, urls: &[String]) -> AppResult<()> {
        let mut patch = Document::new();
        patch.insert("evidence_urls".to_string(), serde_json::to_value(urls)?);
        self.store.update(COLLECTION, id.as_str(), patch).await
    }

    /// Record an issued certificate on an activity.
    pub async fn record_certificate(
        &self,
        id: &ActivityId,
        url: &str,
        generated_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut patch = Document::new();
        patch.insert(
            "certificate_url".to_string(),
            serde_json::Value::String(url.to_string()),
        );
        patch.insert(
            "certificate_generated_at".to_string(),
            serde_json::to_value(generated_at)?,
        );
        self.store.update(COLLECTION, id.as_str(), patch).await
    }

    /// Live subscription to all of a user's activities.
    pub async fn watch_for_user(&self, user_id: &UserId) -> AppResult<Watch> {
        self.store
            .watch(
                COLLECTION,
                vec![FieldFilter::eq("user_id", user_id.as_str())],
            )
            .await
    }

    /// Live subscription to a user's approved activities. This is the
    /// query the certificate watcher runs on.
    pub async fn watch_approved_for_user(&self, user_id: &UserId) -> AppResult<Watch> {
        self.store
            .watch(
                COLLECTION,
                vec![
                    FieldFilter::eq("user_id", user_id.as_str()),
                    FieldFilter::eq("status", ActivityStatus::Approved.as_str()),
                ],
            )
            .await
    }
}
