//! Notification entities.

pub mod model;
pub mod severity;

pub use model::Notification;
pub use severity::Severity;
