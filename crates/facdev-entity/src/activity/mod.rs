//! Activity domain entities and scoring.

pub mod kind;
pub mod mode;
pub mod model;
pub mod role;
pub mod scoring;
pub mod status;

pub use kind::ActivityKind;
pub use mode::AttendanceMode;
pub use model::{Activity, ActivitySubmission};
pub use role::ParticipationRole;
pub use scoring::compute_score;
pub use status::ActivityStatus;
