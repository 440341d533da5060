//! Portal-wide configuration.

use serde::{Deserialize, Serialize};

/// Settings that apply across the whole portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Yearly development score faculty are expected to reach.
    #[serde(default = "default_target_score")]
    pub target_score: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            target_score: default_target_score(),
        }
    }
}

fn default_target_score() -> u32 {
    100
}
