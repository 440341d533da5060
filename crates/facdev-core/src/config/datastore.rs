//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Document store provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatastoreConfig {
    /// Document store provider to use. Only `"memory"` is built in.
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}
