//! # facdev-service
//!
//! Business logic service layer for the FacDev portal. Each service
//! orchestrates repositories, object storage, and notifications to
//! implement application-level use cases.
//!
//! Services follow constructor injection. All dependencies are
//! provided at construction time via `Arc` references.

pub mod activity;
pub mod context;
pub mod event;
pub mod notification;
pub mod profile;
pub mod report;

pub use activity::{ActivityService, EvidenceFile, ReviewService};
pub use context::SessionContext;
pub use event::EventService;
pub use notification::NotificationService;
pub use profile::ProfileService;
pub use report::{DashboardSummary, ReportService, ReportSummary};
