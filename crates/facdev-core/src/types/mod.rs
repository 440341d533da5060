//! Shared value types.

pub mod filter;
pub mod id;

pub use filter::{FieldFilter, FilterValue};
pub use id::{ActivityId, EventId, NotificationId, RegistrationId, UserId};
