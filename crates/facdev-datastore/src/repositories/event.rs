//! Event and event registration repository implementation.

use std::sync::Arc;

use facdev_core::result::AppResult;
use facdev_core::traits::datastore::{DocumentStore, to_document};
use facdev_core::types::filter::FieldFilter;
use facdev_core::types::{EventId, UserId};
use facdev_entity::event::{Event, EventRegistration, EventStatus};

use super::decode_all;

/// Collection holding events.
pub const EVENTS: &str = "events";
/// Collection holding event registrations.
pub const REGISTRATIONS: &str = "event_registrations";

/// Repository for events and their registrations.
#[derive(Clone)]
pub struct EventRepository {
    store: Arc<dyn DocumentStore>,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a new event.
    pub async fn create(&self, event: &Event) -> AppResult<()> {
        let doc = to_document(event)?;
        self.store.set(EVENTS, event.id.as_str(), doc).await
    }

    /// Point read by identifier.
    pub async fn find(&self, id: &EventId) -> AppResult<Option<Event>> {
        match self.store.get(EVENTS, id.as_str()).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    /// List events in a given state, soonest first.
    pub async fn list_by_status(&self, status: EventStatus) -> AppResult<Vec<Event>> {
        let docs = self
            .store
            .query(EVENTS, &[FieldFilter::eq("status", status.as_str())])
            .await?;
        let mut events: Vec<Event> = decode_all(docs)?;
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(events)
    }

    /// Persist a registration.
    pub async fn create_registration(&self, registration: &EventRegistration) -> AppResult<()> {
        let doc = to_document(registration)?;
        self.store
            .set(REGISTRATIONS, registration.id.as_str(), doc)
            .await
    }

    /// Look up a user's registration for one event, if any.
    pub async fn find_registration(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> AppResult<Option<EventRegistration>> {
        let docs = self
            .store
            .query(
                REGISTRATIONS,
                &[
                    FieldFilter::eq("event_id", event_id.as_str()),
                    FieldFilter::eq("user_id", user_id.as_str()),
                ],
            )
            .await?;
        match docs.into_iter().next() {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    /// List every registration a user holds.
    pub async fn list_registrations_by_user(
        &self,
        user_id: &UserId,
    ) -> AppResult<Vec<EventRegistration>> {
        let docs = self
            .store
            .query(
                REGISTRATIONS,
                &[FieldFilter::eq("user_id", user_id.as_str())],
            )
            .await?;
        decode_all(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::NaiveDate;
    use facdev_entity::event::NewEvent;

    fn new_event(title: &str, start: NaiveDate) -> Event {
        Event::from_new(NewEvent {
            title: title.into(),
            description: String::new(),
            kind: "seminar".into(),
            start_date: start,
            end_date: start,
            venue: "Hall".into(),
            organizer: "IQAC".into(),
            max_participants: 50,
        })
    }

    #[tokio::test]
    async fn active_events_are_listed_soonest_first() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        let later = new_event("Later", NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        let sooner = new_event("Sooner", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        repo.create(&later).await.unwrap();
        repo.create(&sooner).await.unwrap();

        let active = repo.list_by_status(EventStatus::Active).await.unwrap();
        assert_eq!(active[0].title, "Sooner");
        assert_eq!(active[1].title, "Later");
    }

    #[tokio::test]
    async fn find_registration_matches_the_exact_pair() {
        let repo = EventRepository::new(Arc::new(MemoryStore::new()));
        let event = new_event("Seminar", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        repo.create(&event).await.unwrap();

        let reg = EventRegistration::new(event.id.clone(), UserId::from("u1"));
        repo.create_registration(&reg).await.unwrap();

        assert!(
            repo.find_registration(&event.id, &UserId::from("u1"))
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_registration(&event.id, &UserId::from("u2"))
                .await
                .unwrap()
                .is_none()
        );
    }
}
