//! Event creation, listing, and registration.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use facdev_core::error::AppError;
use facdev_core::types::EventId;
use facdev_datastore::repositories::event::EventRepository;
use facdev_datastore::repositories::user::UserRepository;
use facdev_entity::event::{Event, EventRegistration, EventStatus, NewEvent};

use crate::context::SessionContext;

/// Manages department events and faculty registrations.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
    /// User account repository, consulted for the organizer gate.
    user_repo: Arc<UserRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(event_repo: Arc<EventRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            event_repo,
            user_repo,
        }
    }

    /// Creates an event. Only reviewer accounts may organize events.
    pub async fn create(&self, ctx: &SessionContext, new_event: NewEvent) -> Result<Event, AppError> {
        let account = self
            .user_repo
            .find(&ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authorization("No account record for the current user"))?;
        if !account.role.is_reviewer() {
            return Err(AppError::authorization(
                "Only HOD or IQAC accounts can create events",
            ));
        }

        new_event
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        if new_event.end_date < new_event.start_date {
            return Err(AppError::validation("End date cannot be before start date"));
        }

        let event = Event::from_new(new_event);
        self.event_repo.create(&event).await?;

        info!(
            user_id = %ctx.user_id,
            event_id = %event.id,
            title = %event.title,
            "Event created"
        );
        Ok(event)
    }

    /// Lists active events, soonest first.
    pub async fn list_active(&self) -> Result<Vec<Event>, AppError> {
        self.event_repo.list_by_status(EventStatus::Active).await
    }

    /// Registers the current user for an event. Registering twice for
    /// the same event is a conflict.
    pub async fn register(
        &self,
        ctx: &SessionContext,
        event_id: &EventId,
    ) -> Result<EventRegistration, AppError> {
        self.event_repo
            .find(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if self
            .event_repo
            .find_registration(event_id, &ctx.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Already registered for this event"));
        }

        let registration = EventRegistration::new(event_id.clone(), ctx.user_id.clone());
        self.event_repo.create_registration(&registration).await?;

        info!(
            user_id = %ctx.user_id,
            event_id = %event_id,
            "Registered for event"
        );
        Ok(registration)
    }

    /// Lists every registration the current user holds.
    pub async fn my_registrations(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<EventRegistration>, AppError> {
        self.event_repo.list_registrations_by_user(&ctx.user_id).await
    }
}
