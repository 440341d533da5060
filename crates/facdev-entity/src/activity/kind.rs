//! Activity kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a faculty development activity.
///
/// Stored as a lowercase string. Unrecognised values decode to
/// [`ActivityKind::Other`] rather than failing, so records written by
/// older or foreign clients stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Hands-on workshop.
    Workshop,
    /// Faculty Development Program.
    Fdp,
    /// Massive open online course.
    Mooc,
    /// Academic conference.
    Conference,
    /// Peer-reviewed publication.
    Publication,
    /// Patent filing or grant.
    Patent,
    /// Any unrecognised kind.
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Base score contributed by this kind before role weighting.
    pub fn base_score(&self) -> u32 {
        match self {
            Self::Workshop => 5,
            Self::Fdp => 10,
            Self::Mooc => 8,
            Self::Conference => 15,
            Self::Publication => 20,
            Self::Patent => 25,
            Self::Other => 5,
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Fdp => "fdp",
            Self::Mooc => "mooc",
            Self::Conference => "conference",
            Self::Publication => "publication",
            Self::Patent => "patent",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
