//! Event registration join record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use facdev_core::types::{EventId, RegistrationId, UserId};

/// Links a user to an event they registered for. At most one
/// registration exists per (event, user) pair, enforced by a duplicate
/// check in the event service before insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistration {
    /// Unique registration identifier.
    pub id: RegistrationId,
    /// The event registered for.
    pub event_id: EventId,
    /// The registering user.
    pub user_id: UserId,
    /// When the registration was made.
    pub registered_at: DateTime<Utc>,
    /// Registration state. Always `registered`; reserved for future
    /// cancellation support.
    pub status: String,
}

impl EventRegistration {
    /// Creates a registration stamped with the current time.
    pub fn new(event_id: EventId, user_id: UserId) -> Self {
        Self {
            id: RegistrationId::random(),
            event_id,
            user_id,
            registered_at: Utc::now(),
            status: "registered".to_string(),
        }
    }
}
