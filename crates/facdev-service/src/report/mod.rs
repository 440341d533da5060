//! Score summaries, dashboard figures, and CSV export.

pub mod summary;

pub use summary::{DashboardSummary, ReportService, ReportSummary};
