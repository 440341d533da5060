//! Activity submission, queries, and review decisions.

pub mod review;
pub mod service;

pub use review::ReviewService;
pub use service::{ActivityService, EvidenceFile};
