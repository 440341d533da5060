//! Certificate watcher configuration.

use serde::{Deserialize, Serialize};

/// Certificate watcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Whether the certificate watcher is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
