//! Typed record identifiers.
//!
//! Every stored record is addressed by an opaque string identifier
//! assigned by the document store. The newtypes below keep the
//! different record families from being mixed up at compile time.

use rand::{Rng, distr::Alphanumeric};

/// Length of store-assigned record identifiers.
pub const RECORD_ID_LEN: usize = 20;

/// Generates a random alphanumeric record identifier of `len` characters.
pub fn generate_record_id(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a fresh random identifier.
            pub fn random() -> Self {
                Self(generate_record_id(RECORD_ID_LEN))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a portal user.
    UserId
);
define_id!(
    /// Identifier of a submitted activity record.
    ActivityId
);
define_id!(
    /// Identifier of an institutional event.
    EventId
);
define_id!(
    /// Identifier of an event registration.
    RegistrationId
);
define_id!(
    /// Identifier of a notification.
    NotificationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = generate_record_id(RECORD_ID_LEN);
        assert_eq!(id.len(), RECORD_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn random_ids_are_distinct() {
        let a = ActivityId::random();
        let b = ActivityId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn display_matches_inner_value() {
        let id = UserId::from("faculty-1");
        assert_eq!(id.to_string(), "faculty-1");
        assert_eq!(id.as_str(), "faculty-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EventId::from("ev-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ev-42\"");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
