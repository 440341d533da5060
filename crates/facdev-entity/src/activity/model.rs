//! Activity entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use facdev_core::types::{ActivityId, UserId};

use super::kind::ActivityKind;
use super::mode::AttendanceMode;
use super::role::ParticipationRole;
use super::scoring::compute_score;
use super::status::ActivityStatus;

/// A faculty development submission subject to review and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: ActivityId,
    /// The submitting user.
    pub user_id: UserId,
    /// Activity title.
    pub title: String,
    /// Activity category.
    pub kind: ActivityKind,
    /// Organising institution or platform.
    pub provider: String,
    /// How the faculty member took part.
    pub role: ParticipationRole,
    /// How the activity was attended.
    pub mode: AttendanceMode,
    /// First day of the activity.
    pub start_date: NaiveDate,
    /// Last day of the activity.
    pub end_date: NaiveDate,
    /// Total duration in hours.
    pub hours: u32,
    /// Free-text description.
    pub description: String,
    /// Review state.
    pub status: ActivityStatus,
    /// Development score, fixed at submission time.
    pub score: u32,
    /// Public URLs of uploaded evidence files.
    pub evidence_urls: Vec<String>,
    /// Public URL of the issued certificate, absent until issuance.
    pub certificate_url: Option<String>,
    /// When the certificate was issued.
    pub certificate_generated_at: Option<DateTime<Utc>>,
    /// The reviewer who decided the submission.
    pub reviewed_by: Option<UserId>,
    /// When the review decision was made.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewer's comment.
    pub review_comment: Option<String>,
    /// When the submission was created.
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Builds a pending activity from a validated submission. The score
    /// is computed here, once, and never recomputed afterwards.
    pub fn from_submission(user_id: UserId, submission: ActivitySubmission) -> Self {
        let score = compute_score(submission.kind, submission.role, submission.hours);
        Self {
            id: ActivityId::random(),
            user_id,
            title: submission.title,
            kind: submission.kind,
            provider: submission.provider,
            role: submission.role,
            mode: submission.mode,
            start_date: submission.start_date,
            end_date: submission.end_date,
            hours: submission.hours,
            description: submission.description,
            status: ActivityStatus::Pending,
            score,
            evidence_urls: Vec::new(),
            certificate_url: None,
            certificate_generated_at: None,
            reviewed_by: None,
            reviewed_at: None,
            review_comment: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the activity is awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == ActivityStatus::Pending
    }

    /// Check if a certificate has already been issued.
    pub fn has_certificate(&self) -> bool {
        self.certificate_url.is_some()
    }
}

/// Input payload for a new activity submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ActivitySubmission {
    /// Activity title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Activity category.
    pub kind: ActivityKind,
    /// Organising institution or platform.
    #[validate(length(min = 1, message = "Provider is required"))]
    pub provider: String,
    /// How the faculty member took part.
    pub role: ParticipationRole,
    /// How the activity was attended.
    pub mode: AttendanceMode,
    /// First day of the activity.
    pub start_date: NaiveDate,
    /// Last day of the activity.
    pub end_date: NaiveDate,
    /// Total duration in hours. Defaults to zero when absent.
    #[serde(default)]
    pub hours: u32,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn submission() -> ActivitySubmission {
        ActivitySubmission {
            title: "Advanced Pedagogy Workshop".into(),
            kind: ActivityKind::Workshop,
            provider: "IIT Bombay".into(),
            role: ParticipationRole::Speaker,
            mode: AttendanceMode::Offline,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            hours: 16,
            description: "Two-day workshop".into(),
        }
    }

    #[test]
    fn from_submission_starts_pending_with_computed_score() {
        let activity = Activity::from_submission(UserId::from("u1"), submission());
        assert_eq!(activity.status, ActivityStatus::Pending);
        assert_eq!(activity.score, 10);
        assert!(activity.evidence_urls.is_empty());
        assert!(activity.certificate_url.is_none());
        assert!(activity.reviewed_by.is_none());
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut s = submission();
        s.title = String::new();
        assert!(s.validate().is_err());
    }

    #[test]
    fn hours_default_to_zero_when_absent() {
        let json = serde_json::json!({
            "title": "MOOC on Rust",
            "kind": "mooc",
            "provider": "NPTEL",
            "role": "participant",
            "mode": "online",
            "start_date": "2024-01-01",
            "end_date": "2024-02-01",
        });
        let s: ActivitySubmission = serde_json::from_value(json).unwrap();
        assert_eq!(s.hours, 0);
        assert_eq!(s.description, "");
    }

    #[test]
    fn optional_fields_deserialize_when_missing() {
        let json = serde_json::json!({
            "user_id": "u1",
            "title": "Patent filing",
            "kind": "patent",
            "provider": "IP Office",
            "role": "author",
            "mode": "offline",
            "start_date": "2024-05-01",
            "end_date": "2024-05-01",
            "hours": 0,
            "description": "",
            "status": "pending",
            "score": 45,
            "evidence_urls": [],
            "created_at": "2024-05-02T08:00:00Z",
            "id": "a1",
        });
        let activity: Activity = serde_json::from_value(json).unwrap();
        assert!(activity.certificate_url.is_none());
        assert!(activity.review_comment.is_none());
    }
}
