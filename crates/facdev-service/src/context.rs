//! Session context carrying the authenticated user.

use serde::{Deserialize, Serialize};

use facdev_core::types::UserId;

/// Context for the current authenticated session.
///
/// Passed into service methods so that every operation knows who is
/// acting. It carries only what the identity provider vouches for;
/// role checks always read the users collection at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The authenticated user's email.
    pub email: String,
}

impl SessionContext {
    /// Creates a new session context.
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
