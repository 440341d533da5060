//! Activity submission and per-user queries.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use validator::Validate;

use facdev_core::error::AppError;
use facdev_core::traits::datastore::Watch;
use facdev_core::traits::storage::ObjectStore;
use facdev_datastore::repositories::activity::ActivityRepository;
use facdev_datastore::repositories::notification::NotificationRepository;
use facdev_entity::activity::{
    Activity, ActivityKind, ActivitySubmission, ParticipationRole, compute_score,
};
use facdev_entity::notification::{Notification, Severity};
use facdev_storage::paths;

use crate::context::SessionContext;

/// One uploaded evidence file accompanying a submission.
#[derive(Debug, Clone)]
pub struct EvidenceFile {
    /// Original file name.
    pub filename: String,
    /// File content bytes.
    pub data: Bytes,
}

/// Handles activity submission and the faculty member's own queries.
#[derive(Clone)]
pub struct ActivityService {
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
    /// Object storage for evidence files.
    storage: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for ActivityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityService").finish()
    }
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(
        activity_repo: Arc<ActivityRepository>,
        notification_repo: Arc<NotificationRepository>,
        storage: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            activity_repo,
            notification_repo,
            storage,
        }
    }

    /// Submits a new activity for review, uploading any evidence files.
    ///
    /// The record is created first so the evidence paths can embed its
    /// identifier; the evidence URL list is patched in afterwards. There
    /// is no rollback: an upload failure aborts the call, leaving the
    /// pending record without evidence links and any already stored
    /// files in place.
    pub async fn submit(
        &self,
        ctx: &SessionContext,
        submission: ActivitySubmission,
        evidence: Vec<EvidenceFile>,
    ) -> Result<Activity, AppError> {
        submission
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if submission.end_date < submission.start_date {
            return Err(AppError::validation("End date cannot be before start date"));
        }

        let mut activity = Activity::from_submission(ctx.user_id.clone(), submission);
        self.activity_repo.create(&activity).await?;

        if !evidence.is_empty() {
            let mut urls = Vec::with_capacity(evidence.len());
            for file in evidence {
                let path = paths::evidence_path(&ctx.user_id, &activity.id, &file.filename);
                self.storage.put(&path, file.data).await?;
                urls.push(self.storage.public_url(&path).await?);
            }
            self.activity_repo
                .set_evidence_urls(&activity.id, &urls)
                .await?;
            activity.evidence_urls = urls;
        }

        let notification = Notification::new(
            ctx.user_id.clone(),
            "Activity Submitted",
            format!(
                "Your {} \"{}\" has been submitted for review.",
                activity.kind, activity.title
            ),
            Severity::Success,
        );
        self.notification_repo.create(&notification).await?;

        info!(
            user_id = %ctx.user_id,
            activity_id = %activity.id,
            kind = %activity.kind,
            score = activity.score,
            "Activity submitted"
        );

        Ok(activity)
    }

    /// Lists the current user's activities, newest first.
    pub async fn list_mine(&self, ctx: &SessionContext) -> Result<Vec<Activity>, AppError> {
        self.activity_repo.list_by_user(&ctx.user_id).await
    }

    /// Opens a live query over the current user's activities.
    pub async fn watch_mine(&self, ctx: &SessionContext) -> Result<Watch, AppError> {
        self.activity_repo.watch_for_user(&ctx.user_id).await
    }

    /// Computes the score a submission would earn, for live preview.
    pub fn preview_score(&self, kind: ActivityKind, role: ParticipationRole, hours: u32) -> u32 {
        compute_score(kind, role, hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use facdev_core::error::ErrorKind;
    use facdev_core::types::UserId;
    use facdev_datastore::MemoryStore;
    use facdev_entity::activity::{ActivityStatus, AttendanceMode};
    use facdev_storage::MemoryObjectStore;

    fn wire() -> (
        ActivityService,
        Arc<ActivityRepository>,
        Arc<NotificationRepository>,
    ) {
        let store = Arc::new(MemoryStore::new());
        let activity_repo = Arc::new(ActivityRepository::new(store.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(store));
        let service = ActivityService::new(
            activity_repo.clone(),
            notification_repo.clone(),
            Arc::new(MemoryObjectStore::new()),
        );
        (service, activity_repo, notification_repo)
    }

    fn ctx() -> SessionContext {
        SessionContext::new(UserId::from("faculty1"), "faculty1@univ.edu")
    }

    fn submission() -> ActivitySubmission {
        ActivitySubmission {
            title: "Rust Workshop".into(),
            kind: ActivityKind::Workshop,
            provider: "NPTEL".into(),
            role: ParticipationRole::Speaker,
            mode: AttendanceMode::Online,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            hours: 16,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn submit_persists_scores_and_notifies() {
        let (service, activity_repo, notification_repo) = wire();

        let evidence = vec![EvidenceFile {
            filename: "attendance.pdf".into(),
            data: Bytes::from_static(b"%PDF-evidence"),
        }];
        let activity = service.submit(&ctx(), submission(), evidence).await.unwrap();

        assert_eq!(activity.status, ActivityStatus::Pending);
        assert_eq!(activity.score, 10);
        assert_eq!(activity.evidence_urls.len(), 1);
        assert!(activity.evidence_urls[0].contains(activity.id.as_str()));

        let stored = activity_repo.find(&activity.id).await.unwrap().unwrap();
        assert_eq!(stored.evidence_urls, activity.evidence_urls);

        let notifications = notification_repo
            .list_by_user(&ctx().user_id)
            .await
            .unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Activity Submitted");
        assert_eq!(
            notifications[0].message,
            "Your workshop \"Rust Workshop\" has been submitted for review."
        );
    }

    #[tokio::test]
    async fn submit_rejects_reversed_dates_before_writing() {
        let (service, activity_repo, _) = wire();

        let mut bad = submission();
        bad.start_date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        bad.end_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let err = service.submit(&ctx(), bad, Vec::new()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(
            activity_repo
                .list_by_user(&ctx().user_id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn submit_rejects_blank_required_fields() {
        let (service, _, _) = wire();

        let mut bad = submission();
        bad.title = String::new();

        let err = service.submit(&ctx(), bad, Vec::new()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("Title is required"));
    }

    #[tokio::test]
    async fn preview_matches_the_scoring_formula() {
        let (service, _, _) = wire();
        assert_eq!(
            service.preview_score(ActivityKind::Workshop, ParticipationRole::Speaker, 16),
            10
        );
        assert_eq!(
            service.preview_score(ActivityKind::Publication, ParticipationRole::Author, 0),
            36
        );
    }
}
