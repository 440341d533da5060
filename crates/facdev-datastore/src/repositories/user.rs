//! User account repository implementation.

use std::sync::Arc;

use facdev_core::result::AppResult;
use facdev_core::traits::datastore::{DocumentStore, to_document};
use facdev_core::types::UserId;
use facdev_entity::user::UserAccount;

/// Collection holding user accounts, keyed by the auth provider's
/// user identifier.
pub const COLLECTION: &str = "users";

/// Repository for user account records.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Look up a user account.
    pub async fn find(&self, user_id: &UserId) -> AppResult<Option<UserAccount>> {
        match self.store.get(COLLECTION, user_id.as_str()).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    /// Write a user account in full.
    pub async fn upsert(&self, account: &UserAccount) -> AppResult<()> {
        let doc = to_document(account)?;
        self.store.set(COLLECTION, account.id.as_str(), doc).await
    }
}
