//! Storage path conventions.
//!
//! Every object the portal stores lives under one of three fixed
//! prefixes, keyed by the owning user and, where applicable, the
//! activity. Certificate paths are deterministic on purpose: a repeated
//! upload for the same activity overwrites the previous artifact
//! instead of accumulating duplicates.

use facdev_core::types::{ActivityId, UserId};

/// Path of an uploaded evidence file.
pub fn evidence_path(user_id: &UserId, activity_id: &ActivityId, filename: &str) -> String {
    format!(
        "evidence/{}/{}/{}",
        user_id.as_str(),
        activity_id.as_str(),
        sanitize_filename(filename)
    )
}

/// Path of the certificate artifact for an activity.
pub fn certificate_path(user_id: &UserId, activity_id: &ActivityId) -> String {
    format!(
        "certificates/{}/{}.pdf",
        user_id.as_str(),
        activity_id.as_str()
    )
}

/// Path of a user's profile photo.
pub fn profile_photo_path(user_id: &UserId) -> String {
    format!("profiles/{}/photo", user_id.as_str())
}

/// Keeps client-supplied filenames from escaping their directory.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}
