//! User account entity model.

use serde::{Deserialize, Serialize};

use facdev_core::types::UserId;

use super::role::UserRole;

/// A portal user account, stored under the authentication provider's
/// opaque user identifier. This record is the authority for the user's
/// role; the authentication layer only supplies identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// The authentication provider's user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Portal role.
    pub role: UserRole,
}

impl UserAccount {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}
