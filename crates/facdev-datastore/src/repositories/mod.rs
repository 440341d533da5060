//! Typed repositories over the raw document store.

pub mod activity;
pub mod event;
pub mod notification;
pub mod profile;
pub mod user;

pub use activity::ActivityRepository;
pub use event::EventRepository;
pub use notification::NotificationRepository;
pub use profile::ProfileRepository;
pub use user::UserRepository;

use serde::de::DeserializeOwned;

use facdev_core::result::AppResult;
use facdev_core::traits::datastore::StoredDocument;

/// Decodes every document of a query result into typed records.
pub(crate) fn decode_all<T: DeserializeOwned>(docs: Vec<StoredDocument>) -> AppResult<Vec<T>> {
    docs.iter().map(StoredDocument::decode).collect()
}
