//! Per-user score summaries and the CSV activity report.

use std::sync::Arc;

use chrono::NaiveDate;

use facdev_core::config::portal::PortalConfig;
use facdev_core::error::{AppError, ErrorKind};
use facdev_datastore::repositories::activity::ActivityRepository;
use facdev_datastore::repositories::event::EventRepository;
use facdev_entity::activity::{Activity, ActivityStatus};

use crate::context::SessionContext;

/// Aggregated counts over one user's submissions. Only approved
/// activities contribute to the score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportSummary {
    /// All submissions, regardless of state.
    pub total: usize,
    /// Approved submissions.
    pub approved: usize,
    /// Submissions awaiting review.
    pub pending: usize,
    /// Rejected submissions.
    pub rejected: usize,
    /// Sum of scores over approved submissions.
    pub total_score: u32,
}

/// Figures backing the dashboard header cards.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DashboardSummary {
    /// All submissions, regardless of state.
    pub total: usize,
    /// Submissions awaiting review.
    pub pending: usize,
    /// Approved submissions.
    pub approved: usize,
    /// Sum of scores over approved submissions.
    pub total_score: u32,
    /// The configured yearly target.
    pub target_score: u32,
    /// Progress towards the target, capped at 100 percent.
    pub progress_percent: f64,
    /// Events the user has registered for.
    pub registered_events: usize,
}

/// Builds score summaries and the downloadable activity report.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
    /// Event repository, for the registration count.
    event_repo: Arc<EventRepository>,
    /// Portal settings carrying the target score.
    config: PortalConfig,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        activity_repo: Arc<ActivityRepository>,
        event_repo: Arc<EventRepository>,
        config: PortalConfig,
    ) -> Self {
        Self {
            activity_repo,
            event_repo,
            config,
        }
    }

    /// Summarizes the current user's submissions.
    pub async fn summary(&self, ctx: &SessionContext) -> Result<ReportSummary, AppError> {
        let activities = self.activity_repo.list_by_user(&ctx.user_id).await?;
        Ok(summarize(&activities))
    }

    /// Builds the dashboard figures for the current user.
    pub async fn dashboard(&self, ctx: &SessionContext) -> Result<DashboardSummary, AppError> {
        let activities = self.activity_repo.list_by_user(&ctx.user_id).await?;
        let registrations = self
            .event_repo
            .list_registrations_by_user(&ctx.user_id)
            .await?;
        let summary = summarize(&activities);

        let target = self.config.target_score.max(1);
        let progress = ((summary.total_score as f64 / target as f64) * 100.0).min(100.0);

        Ok(DashboardSummary {
            total: summary.total,
            pending: summary.pending,
            approved: summary.approved,
            total_score: summary.total_score,
            target_score: self.config.target_score,
            progress_percent: progress,
            registered_events: registrations.len(),
        })
    }

    /// Exports the current user's activities as CSV, one row per
    /// submission, newest first.
    pub async fn csv_export(&self, ctx: &SessionContext) -> Result<String, AppError> {
        let activities = self.activity_repo.list_by_user(&ctx.user_id).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "Title",
                "Type",
                "Provider",
                "Role",
                "Mode",
                "Start Date",
                "End Date",
                "Score",
                "Status",
            ])
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to write CSV", e))?;
        for activity in &activities {
            writer
                .write_record([
                    activity.title.as_str(),
                    activity.kind.as_str(),
                    activity.provider.as_str(),
                    activity.role.as_str(),
                    activity.mode.as_str(),
                    &activity.start_date.to_string(),
                    &activity.end_date.to_string(),
                    &activity.score.to_string(),
                    activity.status.as_str(),
                ])
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Internal, "Failed to write CSV", e)
                })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to flush CSV", e))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "CSV was not UTF-8", e))
    }

    /// Suggested file name for a report exported on `date`.
    pub fn export_filename(date: NaiveDate) -> String {
        format!("activities-report-{date}.csv")
    }
}

fn summarize(activities: &[Activity]) -> ReportSummary {
    ReportSummary {
        total: activities.len(),
        approved: count(activities, ActivityStatus::Approved),
        pending: count(activities, ActivityStatus::Pending),
        rejected: count(activities, ActivityStatus::Rejected),
        total_score: activities
            .iter()
            .filter(|a| a.status == ActivityStatus::Approved)
            .map(|a| a.score)
            .sum(),
    }
}

fn count(activities: &[Activity], status: ActivityStatus) -> usize {
    activities.iter().filter(|a| a.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use facdev_core::types::UserId;
    use facdev_datastore::MemoryStore;
    use facdev_entity::activity::{
        ActivityKind, ActivitySubmission, AttendanceMode, ParticipationRole,
    };

    struct Fixture {
        service: ReportService,
        activity_repo: Arc<ActivityRepository>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let activity_repo = Arc::new(ActivityRepository::new(store.clone()));
        let event_repo = Arc::new(EventRepository::new(store));
        Fixture {
            service: ReportService::new(
                activity_repo.clone(),
                event_repo,
                PortalConfig::default(),
            ),
            activity_repo,
        }
    }

    fn ctx() -> SessionContext {
        SessionContext::new(UserId::from("u1"), "u1@univ.edu")
    }

    fn submission(title: &str, kind: ActivityKind) -> ActivitySubmission {
        ActivitySubmission {
            title: title.into(),
            kind,
            provider: "NPTEL".into(),
            role: ParticipationRole::Participant,
            mode: AttendanceMode::Online,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            hours: 8,
            description: String::new(),
        }
    }

    async fn seed(f: &Fixture, title: &str, kind: ActivityKind, status: ActivityStatus) {
        let activity =
            Activity::from_submission(ctx().user_id, submission(title, kind));
        f.activity_repo.create(&activity).await.unwrap();
        if status != ActivityStatus::Pending {
            f.activity_repo
                .record_review(
                    &activity.id,
                    status,
                    &UserId::from("hod1"),
                    "done",
                    Utc::now(),
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn only_approved_scores_count() {
        let f = fixture();
        seed(&f, "Approved one", ActivityKind::Fdp, ActivityStatus::Approved).await;
        seed(&f, "Pending one", ActivityKind::Patent, ActivityStatus::Pending).await;
        seed(&f, "Rejected one", ActivityKind::Mooc, ActivityStatus::Rejected).await;

        let summary = f.service.summary(&ctx()).await.unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.approved, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.rejected, 1);
        // fdp base 10, participant, 8 hours
        assert_eq!(summary.total_score, 11);
    }

    #[tokio::test]
    async fn dashboard_progress_is_capped() {
        let f = fixture();
        for n in 0..6 {
            seed(
                &f,
                &format!("Patent {n}"),
                ActivityKind::Patent,
                ActivityStatus::Approved,
            )
            .await;
        }

        let dashboard = f.service.dashboard(&ctx()).await.unwrap();
        assert!(dashboard.total_score > dashboard.target_score);
        assert_eq!(dashboard.progress_percent, 100.0);
        assert_eq!(dashboard.registered_events, 0);
    }

    #[tokio::test]
    async fn csv_has_the_report_columns() {
        let f = fixture();
        seed(&f, "Rust Workshop", ActivityKind::Workshop, ActivityStatus::Approved).await;

        let csv = f.service.csv_export(&ctx()).await.unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Title,Type,Provider,Role,Mode,Start Date,End Date,Score,Status")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Rust Workshop,workshop,NPTEL,participant,online,"));
        assert!(row.ends_with(",approved"));
        assert!(row.contains("2024-01-10,2024-01-12"));
    }

    #[tokio::test]
    async fn export_filename_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(
            ReportService::export_filename(date),
            "activities-report-2024-06-30.csv"
        );
    }
}
