//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use facdev_core::config::portal::PortalConfig;
use facdev_core::error::AppError;
use facdev_core::types::{ActivityId, UserId};
use facdev_datastore::MemoryStore;
use facdev_datastore::repositories::{
    ActivityRepository, EventRepository, NotificationRepository, ProfileRepository, UserRepository,
};
use facdev_entity::activity::{
    Activity, ActivityKind, ActivitySubmission, AttendanceMode, ParticipationRole,
};
use facdev_entity::event::NewEvent;
use facdev_entity::profile::ProfileUpdate;
use facdev_entity::user::{UserAccount, UserRole};
use facdev_service::{
    ActivityService, EventService, NotificationService, ProfileService, ReportService,
    ReviewService, SessionContext,
};
use facdev_storage::MemoryObjectStore;
use facdev_worker::CertificateWatcher;

/// A fully wired in-memory portal deployment.
pub struct TestPortal {
    pub activity_repo: Arc<ActivityRepository>,
    pub notification_repo: Arc<NotificationRepository>,
    pub event_repo: Arc<EventRepository>,
    pub profile_repo: Arc<ProfileRepository>,
    pub user_repo: Arc<UserRepository>,
    pub storage: Arc<MemoryObjectStore>,
    pub activity_service: ActivityService,
    pub review_service: ReviewService,
    pub notification_service: NotificationService,
    pub profile_service: ProfileService,
    pub event_service: EventService,
    pub report_service: ReportService,
    pub faculty: SessionContext,
    pub reviewer: SessionContext,
}

impl TestPortal {
    /// Wires an in-memory deployment and seeds one faculty member, one
    /// HOD, and one IQAC account.
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let activity_repo = Arc::new(ActivityRepository::new(store.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(store.clone()));
        let event_repo = Arc::new(EventRepository::new(store.clone()));
        let profile_repo = Arc::new(ProfileRepository::new(store.clone()));
        let user_repo = Arc::new(UserRepository::new(store));
        let storage = Arc::new(MemoryObjectStore::new());

        let activity_service = ActivityService::new(
            activity_repo.clone(),
            notification_repo.clone(),
            storage.clone(),
        );
        let review_service = ReviewService::new(
            activity_repo.clone(),
            notification_repo.clone(),
            user_repo.clone(),
        );
        let notification_service = NotificationService::new(notification_repo.clone());
        let profile_service = ProfileService::new(profile_repo.clone(), storage.clone());
        let event_service = EventService::new(event_repo.clone(), user_repo.clone());
        let report_service = ReportService::new(
            activity_repo.clone(),
            event_repo.clone(),
            PortalConfig::default(),
        );

        let faculty = SessionContext::new(UserId::from("faculty1"), "faculty1@univ.edu");
        let reviewer = SessionContext::new(UserId::from("hod1"), "hod1@univ.edu");

        user_repo
            .upsert(&UserAccount::new(
                faculty.user_id.clone(),
                "Asha Verma",
                faculty.email.clone(),
                UserRole::Faculty,
            ))
            .await
            .expect("seed faculty account");
        user_repo
            .upsert(&UserAccount::new(
                reviewer.user_id.clone(),
                "Prof. R. Iyer",
                reviewer.email.clone(),
                UserRole::Hod,
            ))
            .await
            .expect("seed reviewer account");
        user_repo
            .upsert(&UserAccount::new(
                UserId::from("iqac1"),
                "Dr. N. Pillai",
                "iqac1@univ.edu",
                UserRole::Iqac,
            ))
            .await
            .expect("seed iqac account");

        Self {
            activity_repo,
            notification_repo,
            event_repo,
            profile_repo,
            user_repo,
            storage,
            activity_service,
            review_service,
            notification_service,
            profile_service,
            event_service,
            report_service,
            faculty,
            reviewer,
        }
    }

    /// A workshop submission template; adjust fields per test as needed.
    pub fn submission(title: &str) -> ActivitySubmission {
        ActivitySubmission {
            title: title.into(),
            kind: ActivityKind::Workshop,
            provider: "IIT Bombay".into(),
            role: ParticipationRole::Speaker,
            mode: AttendanceMode::Offline,
            start_date: date(2026, 3, 2),
            end_date: date(2026, 3, 3),
            hours: 16,
            description: "Two-day hands-on workshop".into(),
        }
    }

    /// Submits a workshop for the faculty member.
    pub async fn submit(&self, title: &str) -> Activity {
        self.activity_service
            .submit(&self.faculty, Self::submission(title), Vec::new())
            .await
            .expect("submit activity")
    }

    /// Submits a workshop and approves it as the reviewer.
    pub async fn submit_approved(&self, title: &str) -> Activity {
        let activity = self.submit(title).await;
        self.review_service
            .approve(&self.reviewer, &activity.id, None)
            .await
            .expect("approve activity")
    }

    /// Saves the faculty member's profile with the given display name.
    pub async fn save_profile(&self, name: &str) {
        self.profile_service
            .save(
                &self.faculty,
                ProfileUpdate {
                    name: name.into(),
                    email: "faculty1@univ.edu".into(),
                    department: "Computer Science".into(),
                    phone: String::new(),
                    designation: String::new(),
                    employee_id: String::new(),
                },
                None,
            )
            .await
            .expect("save profile");
    }

    /// Starts a certificate watcher for the faculty member. Returns the
    /// shutdown sender and the join handle.
    pub fn spawn_watcher(&self) -> (watch::Sender<bool>, JoinHandle<Result<(), AppError>>) {
        let watcher = CertificateWatcher::new(
            self.faculty.clone(),
            self.activity_repo.clone(),
            self.profile_repo.clone(),
            self.storage.clone(),
        );
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move { watcher.run(rx).await });
        (tx, handle)
    }

    /// Polls until the activity has a certificate URL, up to 5 seconds.
    pub async fn wait_for_certificate(&self, id: &ActivityId) -> Option<String> {
        for _ in 0..250 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if let Some(found) = self.activity_repo.find(id).await.expect("find activity") {
                if found.certificate_url.is_some() {
                    return found.certificate_url;
                }
            }
        }
        None
    }
}

/// Builds a calendar date; panics on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A reviewer-authored event create request.
pub fn new_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.into(),
        description: "Invited talks".into(),
        kind: "seminar".into(),
        start_date: date(2026, 4, 10),
        end_date: date(2026, 4, 10),
        venue: "Seminar Hall A".into(),
        organizer: "IQAC".into(),
        max_participants: 60,
    }
}
