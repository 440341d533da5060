//! Review decisions on submitted activities.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use facdev_core::error::AppError;
use facdev_core::types::ActivityId;
use facdev_datastore::repositories::activity::ActivityRepository;
use facdev_datastore::repositories::notification::NotificationRepository;
use facdev_datastore::repositories::user::UserRepository;
use facdev_entity::activity::{Activity, ActivityStatus};
use facdev_entity::notification::{Notification, Severity};
use facdev_entity::user::UserAccount;

use crate::context::SessionContext;

/// Approves and rejects activity submissions.
///
/// Every operation verifies the acting user holds a reviewer role in
/// the users collection. A decision is final: once an activity leaves
/// the pending state it can never be reviewed again.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
    /// User account repository, consulted for the reviewer gate.
    user_repo: Arc<UserRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        activity_repo: Arc<ActivityRepository>,
        notification_repo: Arc<NotificationRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            activity_repo,
            notification_repo,
            user_repo,
        }
    }

    /// Lists every submission, newest first.
    pub async fn list_all(&self, ctx: &SessionContext) -> Result<Vec<Activity>, AppError> {
        self.require_reviewer(ctx).await?;
        self.activity_repo.list_all().await
    }

    /// Lists submissions still awaiting a decision, newest first.
    pub async fn list_pending(&self, ctx: &SessionContext) -> Result<Vec<Activity>, AppError> {
        let mut activities = self.list_all(ctx).await?;
        activities.retain(Activity::is_pending);
        Ok(activities)
    }

    /// Approves a pending activity.
    ///
    /// A blank comment is replaced with "Approved". The faculty member
    /// is notified that certificate generation will follow.
    pub async fn approve(
        &self,
        ctx: &SessionContext,
        activity_id: &ActivityId,
        comment: Option<&str>,
    ) -> Result<Activity, AppError> {
        self.require_reviewer(ctx).await?;

        let activity = self
            .activity_repo
            .find(activity_id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))?;
        if !activity.is_pending() {
            return Err(AppError::conflict("Activity has already been reviewed"));
        }

        let comment = match comment {
            Some(c) if !c.trim().is_empty() => c.to_string(),
            _ => "Approved".to_string(),
        };
        self.activity_repo
            .record_review(
                activity_id,
                ActivityStatus::Approved,
                &ctx.user_id,
                &comment,
                Utc::now(),
            )
            .await?;

        let notification = Notification::new(
            activity.user_id.clone(),
            "Activity Approved",
            format!(
                "Your activity \"{}\" has been approved! Certificate will be generated automatically.",
                activity.title
            ),
            Severity::Success,
        );
        self.notification_repo.create(&notification).await?;

        info!(
            reviewer_id = %ctx.user_id,
            activity_id = %activity.id,
            score = activity.score,
            "Activity approved"
        );

        self.reload(activity_id).await
    }

    /// Rejects a pending activity. The comment is mandatory and is
    /// checked before any state changes.
    pub async fn reject(
        &self,
        ctx: &SessionContext,
        activity_id: &ActivityId,
        comment: &str,
    ) -> Result<Activity, AppError> {
        self.require_reviewer(ctx).await?;

        if comment.trim().is_empty() {
            return Err(AppError::validation(
                "A comment is required when rejecting an activity",
            ));
        }

        let activity = self
            .activity_repo
            .find(activity_id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))?;
        if !activity.is_pending() {
            return Err(AppError::conflict("Activity has already been reviewed"));
        }

        self.activity_repo
            .record_review(
                activity_id,
                ActivityStatus::Rejected,
                &ctx.user_id,
                comment,
                Utc::now(),
            )
            .await?;

        let notification = Notification::new(
            activity.user_id.clone(),
            "Activity Rejected",
            format!(
                "Your activity \"{}\" was rejected. Reason: {comment}",
                activity.title
            ),
            Severity::Error,
        );
        self.notification_repo.create(&notification).await?;

        info!(
            reviewer_id = %ctx.user_id,
            activity_id = %activity.id,
            "Activity rejected"
        );

        self.reload(activity_id).await
    }

    async fn reload(&self, activity_id: &ActivityId) -> Result<Activity, AppError> {
        self.activity_repo
            .find(activity_id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))
    }

    async fn require_reviewer(&self, ctx: &SessionContext) -> Result<UserAccount, AppError> {
        let account = self
            .user_repo
            .find(&ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authorization("No account record for the current user"))?;
        if !account.role.is_reviewer() {
            return Err(AppError::authorization(
                "Only HOD or IQAC accounts can review activities",
            ));
        }
        Ok(account)
    }
}
