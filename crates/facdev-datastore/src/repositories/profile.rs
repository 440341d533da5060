//! Profile repository implementation.

use std::sync::Arc;

use facdev_core::result::AppResult;
use facdev_core::traits::datastore::{DocumentStore, to_document};
use facdev_core::types::UserId;
use facdev_entity::profile::Profile;

/// Collection holding per-user profiles, keyed by user identifier.
pub const COLLECTION: &str = "profiles";

/// Repository for profile records.
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Look up a user's profile.
    pub async fn find(&self, user_id: &UserId) -> AppResult<Option<Profile>> {
        match self.store.get(COLLECTION, user_id.as_str()).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    /// Write a profile in full, creating it on first save.
    pub async fn upsert(&self, profile: &Profile) -> AppResult<()> {
        let doc = to_document(profile)?;
        self.store.set(COLLECTION, profile.id.as_str(), doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use facdev_entity::profile::ProfileUpdate;

    #[tokio::test]
    async fn upsert_replaces_the_previous_profile() {
        let repo = ProfileRepository::new(Arc::new(MemoryStore::new()));
        let user = UserId::from("u1");

        let first = Profile::from_update(
            user.clone(),
            ProfileUpdate {
                name: "Dr. Rao".into(),
                email: "rao@univ.edu".into(),
                department: "CSE".into(),
                phone: "12345".into(),
                designation: String::new(),
                employee_id: String::new(),
            },
            Some("memory://profiles/u1/photo".into()),
        );
        repo.upsert(&first).await.unwrap();

        let second = Profile::from_update(
            user.clone(),
            ProfileUpdate {
                name: "Dr. Rao".into(),
                email: "rao@univ.edu".into(),
                department: "ECE".into(),
                phone: String::new(),
                designation: String::new(),
                employee_id: String::new(),
            },
            None,
        );
        repo.upsert(&second).await.unwrap();

        let found = repo.find(&user).await.unwrap().unwrap();
        assert_eq!(found.department, "ECE");
        assert_eq!(found.phone, "");
        assert!(found.photo_url.is_none());
    }
}
