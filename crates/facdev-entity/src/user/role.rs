//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role of a user account.
///
/// Roles live on the stored user record, not in the authentication
/// layer, and are resolved fresh for every privileged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular faculty member; submits activities.
    Faculty,
    /// Head of Department; reviews submissions.
    Hod,
    /// Internal Quality Assurance Cell member; reviews submissions.
    Iqac,
}

impl UserRole {
    /// Check if the role may review submissions and manage events.
    pub fn is_reviewer(&self) -> bool {
        matches!(self, Self::Hod | Self::Iqac)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Hod => "hod",
            Self::Iqac => "iqac",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
