//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use facdev_core::types::UserId;

/// Per-user profile details, stored under the user's own identifier.
/// Created lazily on the first settings save and fully replaced on
/// every save thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// The owning user; doubles as the document identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Department.
    pub department: String,
    /// Phone number.
    pub phone: String,
    /// Public URL of the profile photo.
    pub photo_url: Option<String>,
    /// Designation, e.g. "Assistant Professor".
    pub designation: String,
    /// Institutional employee identifier.
    pub employee_id: String,
    /// When the profile was last saved.
    pub updated_at: DateTime<Utc>,
}

/// Input payload for saving profile settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    /// Display name.
    pub name: String,
    /// Contact email.
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Designation.
    #[serde(default)]
    pub designation: String,
    /// Institutional employee identifier.
    #[serde(default)]
    pub employee_id: String,
}

impl Profile {
    /// Builds the stored profile for an update, carrying the resolved
    /// photo URL and stamping the save time.
    pub fn from_update(user_id: UserId, update: ProfileUpdate, photo_url: Option<String>) -> Self {
        Self {
            id: user_id,
            name: update.name,
            email: update.email,
            department: update.department,
            phone: update.phone,
            photo_url,
            designation: update.designation,
            employee_id: update.employee_id,
            updated_at: Utc::now(),
        }
    }

    /// Display name used on certificates, falling back to a neutral
    /// placeholder when the profile has no usable name.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Faculty Member"
        } else {
            &self.name
        }
    }
}
