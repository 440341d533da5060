//! Participation role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the faculty member took part in the activity.
///
/// Unrecognised values decode to [`ParticipationRole::Other`] and carry
/// the neutral multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationRole {
    /// Attended as a participant.
    Participant,
    /// Delivered a talk or session.
    Speaker,
    /// Organised the activity.
    Organizer,
    /// Authored the publication or patent.
    Author,
    /// Any unrecognised role.
    #[serde(other)]
    Other,
}

impl ParticipationRole {
    /// Score multiplier applied to the kind's base score.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Participant => 1.0,
            Self::Speaker => 1.5,
            Self::Organizer => 2.0,
            Self::Author => 1.8,
            Self::Other => 1.0,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::Speaker => "speaker",
            Self::Organizer => "organizer",
            Self::Author => "author",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ParticipationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_the_scoring_table() {
        assert_eq!(ParticipationRole::Participant.multiplier(), 1.0);
        assert_eq!(ParticipationRole::Speaker.multiplier(), 1.5);
        assert_eq!(ParticipationRole::Organizer.multiplier(), 2.0);
        assert_eq!(ParticipationRole::Author.multiplier(), 1.8);
    }

    #[test]
    fn unknown_role_decodes_to_other() {
        let role: ParticipationRole = serde_json::from_str("\"mentor\"").unwrap();
        assert_eq!(role, ParticipationRole::Other);
        assert_eq!(role.multiplier(), 1.0);
    }
}
