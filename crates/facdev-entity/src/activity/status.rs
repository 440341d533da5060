//! Activity review status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a submitted activity.
///
/// The only legal transitions are `Pending -> Approved` and
/// `Pending -> Rejected`; approved and rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Awaiting review.
    Pending,
    /// Accepted by a reviewer; eligible for certificate issuance.
    Approved,
    /// Declined by a reviewer.
    Rejected,
}

impl ActivityStatus {
    /// Check if the status is a terminal review outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
