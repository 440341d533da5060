//! Live certificate issuance.
//!
//! A watcher subscribes to one user's approved activities and issues a
//! certificate for every record that does not carry one yet. Issuance
//! is not transactional with the approval, so each candidate is re-read
//! immediately before rendering; the deterministic storage path turns a
//! lost race into an overwrite of the same object.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{error, info};

use facdev_certificate::{CertificateData, certificate_id, render};
use facdev_core::error::AppError;
use facdev_core::traits::datastore::StoredDocument;
use facdev_core::traits::storage::ObjectStore;
use facdev_core::types::ActivityId;
use facdev_datastore::repositories::activity::ActivityRepository;
use facdev_datastore::repositories::profile::ProfileRepository;
use facdev_entity::activity::{Activity, ActivityStatus};
use facdev_service::SessionContext;
use facdev_storage::paths;

/// Watches one user's approved activities and issues certificates.
#[derive(Clone)]
pub struct CertificateWatcher {
    /// The user whose activities are watched.
    ctx: SessionContext,
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
    /// Profile repository, read for the printed faculty name.
    profile_repo: Arc<ProfileRepository>,
    /// Object storage for rendered certificates.
    storage: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for CertificateWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateWatcher").finish()
    }
}

impl CertificateWatcher {
    /// Creates a new certificate watcher for the given user.
    pub fn new(
        ctx: SessionContext,
        activity_repo: Arc<ActivityRepository>,
        profile_repo: Arc<ProfileRepository>,
        storage: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            ctx,
            activity_repo,
            profile_repo,
            storage,
        }
    }

    /// Runs until the cancel signal flips to true or its sender is
    /// dropped. Every snapshot delivered by the live query is scanned
    /// for approved records without a certificate.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) -> Result<(), AppError> {
        let mut subscription = self
            .activity_repo
            .watch_approved_for_user(&self.ctx.user_id)
            .await?;

        info!(user_id = %self.ctx.user_id, "Certificate watcher started");

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                snapshot = subscription.recv() => {
                    match snapshot {
                        Some(documents) => self.process_snapshot(documents).await,
                        None => break,
                    }
                }
            }
        }

        info!(user_id = %self.ctx.user_id, "Certificate watcher stopped");
        Ok(())
    }

    /// Issues certificates for the snapshot's uncertified records. A
    /// failure on one record is logged and does not stop the others.
    async fn process_snapshot(&self, documents: Vec<StoredDocument>) {
        let mut candidates = Vec::new();
        for document in &documents {
            match document.decode::<Activity>() {
                Ok(activity) if !activity.has_certificate() => candidates.push(activity),
                Ok(_) => {}
                Err(e) => {
                    error!(
                        user_id = %self.ctx.user_id,
                        error = %e,
                        "Skipping undecodable activity"
                    );
                }
            }
        }
        if candidates.is_empty() {
            return;
        }

        // One name lookup per snapshot, shared by every certificate.
        let faculty_name = match self.display_name().await {
            Ok(name) => name,
            Err(e) => {
                error!(user_id = %self.ctx.user_id, error = %e, "Profile lookup failed");
                return;
            }
        };

        for activity in candidates {
            if let Err(e) = self.issue(&activity.id, &faculty_name).await {
                error!(
                    user_id = %self.ctx.user_id,
                    activity_id = %activity.id,
                    error = %e,
                    "Certificate generation failed"
                );
            }
        }
    }

    /// The name printed on certificates. Falls back to a neutral
    /// placeholder when the user has no profile yet.
    async fn display_name(&self) -> Result<String, AppError> {
        Ok(match self.profile_repo.find(&self.ctx.user_id).await? {
            Some(profile) => profile.display_name().to_string(),
            None => "Faculty Member".to_string(),
        })
    }

    /// Renders, stores, and records one certificate.
    ///
    /// The record is re-read first: the snapshot may be stale, and a
    /// record that gained a certificate in the meantime is skipped.
    async fn issue(&self, activity_id: &ActivityId, faculty_name: &str) -> Result<(), AppError> {
        let Some(activity) = self.activity_repo.find(activity_id).await? else {
            return Ok(());
        };
        if activity.status != ActivityStatus::Approved || activity.has_certificate() {
            return Ok(());
        }

        let data = CertificateData {
            faculty_name: faculty_name.to_string(),
            activity_title: activity.title.clone(),
            activity_kind: activity.kind.as_str().to_string(),
            duration: format!("{} hours", activity.hours),
            issue_date: Utc::now().format("%B %-d, %Y").to_string(),
            score: activity.score,
            certificate_id: certificate_id(activity.id.as_str()),
        };
        let pdf = render(&data);

        let path = paths::certificate_path(&self.ctx.user_id, &activity.id);
        self.storage.put(&path, pdf).await?;
        let url = self.storage.public_url(&path).await?;

        self.activity_repo
            .record_certificate(&activity.id, &url, Utc::now())
            .await?;

        info!(
            user_id = %self.ctx.user_id,
            activity_id = %activity.id,
            certificate_id = %data.certificate_id,
            url = %url,
            "Certificate generated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::NaiveDate;
    use facdev_core::types::UserId;
    use facdev_datastore::MemoryStore;
    use facdev_entity::activity::{
        ActivityKind, ActivitySubmission, AttendanceMode, ParticipationRole,
    };
    use facdev_entity::profile::{Profile, ProfileUpdate};
    use facdev_storage::MemoryObjectStore;

    struct Fixture {
        watcher: CertificateWatcher,
        activity_repo: Arc<ActivityRepository>,
        profile_repo: Arc<ProfileRepository>,
        storage: Arc<MemoryObjectStore>,
    }

    fn wire() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let activity_repo = Arc::new(ActivityRepository::new(store.clone()));
        let profile_repo = Arc::new(ProfileRepository::new(store));
        let storage = Arc::new(MemoryObjectStore::new());
        let ctx = SessionContext::new(UserId::from("faculty1"), "faculty1@univ.edu");
        let watcher = CertificateWatcher::new(
            ctx,
            activity_repo.clone(),
            profile_repo.clone(),
            storage.clone(),
        );
        Fixture {
            watcher,
            activity_repo,
            profile_repo,
            storage,
        }
    }

    fn submission(title: &str) -> ActivitySubmission {
        ActivitySubmission {
            title: title.into(),
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

    async fn approved_activity(f: &Fixture, title: &str) -> Activity {
        let activity = Activity::from_submission(UserId::from("faculty1"), submission(title));
        f.activity_repo.create(&activity).await.unwrap();
        f.activity_repo
            .record_review(
                &activity.id,
                ActivityStatus::Approved,
                &UserId::from("hod1"),
                "Approved",
                Utc::now(),
            )
            .await
            .unwrap();
        activity
    }

    async fn seed_profile(f: &Fixture, name: &str) {
        let profile = Profile::from_update(
            UserId::from("faculty1"),
            ProfileUpdate {
                name: name.into(),
                email: "faculty1@univ.edu".into(),
                department: String::new(),
                phone: String::new(),
                designation: String::new(),
                employee_id: String::new(),
            },
            None,
        );
        f.profile_repo.upsert(&profile).await.unwrap();
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[tokio::test]
    async fn issue_renders_stores_and_records() {
        let f = wire();
        let activity = approved_activity(&f, "Advanced Rust Workshop").await;

        f.watcher.issue(&activity.id, "Asha Verma").await.unwrap();

        let path = paths::certificate_path(&UserId::from("faculty1"), &activity.id);
        assert!(f.storage.exists(&path).await.unwrap());
        let pdf = f.storage.get(&path).await.unwrap();
        assert!(contains(&pdf, b"(ASHA VERMA)"));
        assert!(contains(&pdf, b"(10 Points)"));

        let stored = f.activity_repo.find(&activity.id).await.unwrap().unwrap();
        assert_eq!(
            stored.certificate_url.as_deref(),
            Some(format!("memory://{path}").as_str())
        );
        assert!(stored.certificate_generated_at.is_some());
    }

    #[tokio::test]
    async fn issue_is_idempotent() {
        let f = wire();
        let activity = approved_activity(&f, "Advanced Rust Workshop").await;

        f.watcher.issue(&activity.id, "Asha Verma").await.unwrap();
        let first = f.activity_repo.find(&activity.id).await.unwrap().unwrap();

        f.watcher.issue(&activity.id, "Asha Verma").await.unwrap();
        let second = f.activity_repo.find(&activity.id).await.unwrap().unwrap();

        assert_eq!(
            first.certificate_generated_at,
            second.certificate_generated_at
        );
        assert_eq!(first.certificate_url, second.certificate_url);
    }

    #[tokio::test]
    async fn issue_skips_records_that_are_not_approved() {
        let f = wire();
        let activity = Activity::from_submission(UserId::from("faculty1"), submission("Pending"));
        f.activity_repo.create(&activity).await.unwrap();

        f.watcher.issue(&activity.id, "Asha Verma").await.unwrap();

        let path = paths::certificate_path(&UserId::from("faculty1"), &activity.id);
        assert!(!f.storage.exists(&path).await.unwrap());
        let stored = f.activity_repo.find(&activity.id).await.unwrap().unwrap();
        assert!(stored.certificate_url.is_none());
    }

    #[tokio::test]
    async fn display_name_prefers_the_profile() {
        let f = wire();
        assert_eq!(f.watcher.display_name().await.unwrap(), "Faculty Member");

        seed_profile(&f, "Asha Verma").await;
        assert_eq!(f.watcher.display_name().await.unwrap(), "Asha Verma");
    }

    #[tokio::test]
    async fn run_issues_on_approval_and_stops_on_shutdown() {
        let f = wire();
        seed_profile(&f, "Asha Verma").await;
        let activity = approved_activity(&f, "Advanced Rust Workshop").await;

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let watcher = f.watcher.clone();
        let handle = tokio::spawn(async move { watcher.run(cancel_rx).await });

        let mut issued = false;
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let stored = f.activity_repo.find(&activity.id).await.unwrap().unwrap();
            if stored.has_certificate() {
                issued = true;
                break;
            }
        }
        assert!(issued, "certificate was not issued before the deadline");

        let path = paths::certificate_path(&UserId::from("faculty1"), &activity.id);
        let pdf = f.storage.get(&path).await.unwrap();
        assert!(contains(&pdf, b"(ASHA VERMA)"));

        cancel_tx.send(true).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn run_stops_when_the_cancel_sender_is_dropped() {
        let f = wire();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let watcher = f.watcher.clone();
        let handle = tokio::spawn(async move { watcher.run(cancel_rx).await });

        drop(cancel_tx);
        handle.await.unwrap().unwrap();
    }
}
