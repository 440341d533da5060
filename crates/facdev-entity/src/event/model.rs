//! Event entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use facdev_core::types::EventId;

/// Visibility state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Listed and open for registration.
    Active,
    /// Hidden from the events listing.
    Inactive,
}

impl EventStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An institution-organised event faculty can register for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Free-form event category label.
    pub kind: String,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// Last day of the event.
    pub end_date: NaiveDate,
    /// Where the event takes place.
    pub venue: String,
    /// Organising body or person.
    pub organizer: String,
    /// Registration capacity.
    pub max_participants: u32,
    /// Number of registered participants.
    #[serde(default)]
    pub registered_count: u32,
    /// Visibility state.
    pub status: EventStatus,
}

impl Event {
    /// Builds an active event from a validated create request.
    pub fn from_new(event: NewEvent) -> Self {
        Self {
            id: EventId::random(),
            title: event.title,
            description: event.description,
            kind: event.kind,
            start_date: event.start_date,
            end_date: event.end_date,
            venue: event.venue,
            organizer: event.organizer,
            max_participants: event.max_participants,
            registered_count: 0,
            status: EventStatus::Active,
        }
    }

    /// Check if the event has reached its registration capacity.
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.max_participants
    }
}

/// Input payload for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEvent {
    /// Event title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Event description.
    #[serde(default)]
    pub description: String,
    /// Free-form event category label.
    #[validate(length(min = 1, message = "Category is required"))]
    pub kind: String,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// Last day of the event.
    pub end_date: NaiveDate,
    /// Where the event takes place.
    #[validate(length(min = 1, message = "Venue is required"))]
    pub venue: String,
    /// Organising body or person.
    #[validate(length(min = 1, message = "Organizer is required"))]
    pub organizer: String,
    /// Registration capacity.
    pub max_participants: u32,
}
