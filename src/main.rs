//! FacDev Portal — faculty development tracking sandbox.
//!
//! Wires an in-memory deployment of the portal and walks one activity
//! submission through review and certificate issuance as a development
//! smoke run.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use facdev_core::config::AppConfig;
use facdev_core::error::AppError;
use facdev_core::traits::storage::ObjectStore;
use facdev_core::types::UserId;
use facdev_datastore::MemoryStore;
use facdev_datastore::repositories::{
    ActivityRepository, EventRepository, NotificationRepository, ProfileRepository, UserRepository,
};
use facdev_entity::activity::{
    ActivityKind, ActivitySubmission, AttendanceMode, ParticipationRole,
};
use facdev_entity::event::NewEvent;
use facdev_entity::profile::ProfileUpdate;
use facdev_entity::user::{UserAccount, UserRole};
use facdev_service::{
    ActivityService, EventService, EvidenceFile, NotificationService, ProfileService,
    ReportService, ReviewService, SessionContext,
};
use facdev_storage::{LocalObjectStore, MemoryObjectStore};
use facdev_worker::CertificateWatcher;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Sandbox error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FACDEV_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main sandbox run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FacDev sandbox v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Document store and repositories ──────────────────
    let store = Arc::new(MemoryStore::new());
    let activity_repo = Arc::new(ActivityRepository::new(store.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(store.clone()));
    let event_repo = Arc::new(EventRepository::new(store.clone()));
    let profile_repo = Arc::new(ProfileRepository::new(store.clone()));
    let user_repo = Arc::new(UserRepository::new(store));

    // ── Step 2: Object storage ───────────────────────────────────
    let storage: Arc<dyn ObjectStore> = match config.storage.provider.as_str() {
        "memory" => Arc::new(MemoryObjectStore::new()),
        _ => Arc::new(
            LocalObjectStore::new(
                &config.storage.local.root_path,
                &config.storage.local.public_base_url,
            )
            .await?,
        ),
    };
    tracing::info!(provider = %config.storage.provider, "Object storage initialized");

    // ── Step 3: Services ─────────────────────────────────────────
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
        config.portal.clone(),
    );
    tracing::info!("Services initialized");

    // ── Step 4: Seed accounts ────────────────────────────────────
    let faculty = SessionContext::new(UserId::from("faculty1"), "asha.verma@univ.edu");
    let reviewer = SessionContext::new(UserId::from("hod1"), "hod.cse@univ.edu");
    user_repo
        .upsert(&UserAccount::new(
            faculty.user_id.clone(),
            "Asha Verma",
            faculty.email.clone(),
            UserRole::Faculty,
        ))
        .await?;
    user_repo
        .upsert(&UserAccount::new(
            reviewer.user_id.clone(),
            "Prof. R. Iyer",
            reviewer.email.clone(),
            UserRole::Hod,
        ))
        .await?;
    tracing::info!("Seeded faculty and reviewer accounts");

    // ── Step 5: Certificate watcher ──────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher_handle = if config.watcher.enabled {
        let watcher = CertificateWatcher::new(
            faculty.clone(),
            activity_repo.clone(),
            profile_repo.clone(),
            storage.clone(),
        );
        let watcher_cancel = shutdown_rx.clone();
        let handle = tokio::spawn(async move { watcher.run(watcher_cancel).await });
        tracing::info!("Certificate watcher started");
        Some(handle)
    } else {
        tracing::info!("Certificate watcher disabled");
        None
    };

    // ── Step 6: Walk a submission through the portal ─────────────
    profile_service
        .save(
            &faculty,
            ProfileUpdate {
                name: "Asha Verma".into(),
                email: "asha.verma@univ.edu".into(),
                department: "Computer Science".into(),
                phone: "98400 12345".into(),
                designation: "Assistant Professor".into(),
                employee_id: "CSE-104".into(),
            },
            None,
        )
        .await?;

    let today = Utc::now().date_naive();
    let activity = activity_service
        .submit(
            &faculty,
            ActivitySubmission {
                title: "Advanced Rust Workshop".into(),
                kind: ActivityKind::Workshop,
                provider: "IIT Bombay".into(),
                role: ParticipationRole::Speaker,
                mode: AttendanceMode::Offline,
                start_date: today,
                end_date: today,
                hours: 16,
                description: "Two-day hands-on workshop on systems programming".into(),
            },
            vec![EvidenceFile {
                filename: "attendance.pdf".into(),
                data: Bytes::from_static(b"%PDF-1.4 attendance sheet"),
            }],
        )
        .await?;

    let pending = review_service.list_pending(&reviewer).await?;
    tracing::info!(count = pending.len(), "Review queue loaded");

    review_service.approve(&reviewer, &activity.id, None).await?;

    // The watcher picks the approval up through its live query.
    let mut certificate_url = None;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if let Some(found) = activity_repo.find(&activity.id).await? {
            if let Some(url) = found.certificate_url {
                certificate_url = Some(url);
                break;
            }
        }
    }
    match certificate_url {
        Some(url) => tracing::info!(%url, "Certificate issued"),
        None => tracing::warn!("No certificate after 5s; is the watcher enabled?"),
    }

    let event = event_service
        .create(
            &reviewer,
            NewEvent {
                title: "AI in Teaching Seminar".into(),
                description: "Invited talks on AI-assisted pedagogy".into(),
                kind: "seminar".into(),
                start_date: today,
                end_date: today,
                venue: "Seminar Hall A".into(),
                organizer: "IQAC".into(),
                max_participants: 60,
            },
        )
        .await?;
    event_service.register(&faculty, &event.id).await?;

    let unread = notification_service.unread_count(&faculty).await?;
    let dashboard = report_service.dashboard(&faculty).await?;
    tracing::info!(
        total = dashboard.total,
        approved = dashboard.approved,
        total_score = dashboard.total_score,
        progress_percent = dashboard.progress_percent,
        registered_events = dashboard.registered_events,
        unread,
        "Dashboard summary"
    );

    let csv = report_service.csv_export(&faculty).await?;
    tracing::info!(
        filename = %ReportService::export_filename(today),
        bytes = csv.len(),
        "CSV export ready"
    );

    // ── Step 7: Shutdown ─────────────────────────────────────────
    let _ = shutdown_tx.send(true);
    if let Some(handle) = watcher_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
    }

    tracing::info!("FacDev sandbox finished");
    Ok(())
}
