//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod datastore;
pub mod logging;
pub mod portal;
pub mod storage;
pub mod watcher;

use serde::{Deserialize, Serialize};

use self::datastore::DatastoreConfig;
use self::logging::LoggingConfig;
use self::portal::PortalConfig;
use self::storage::StorageConfig;
use self::watcher::WatcherConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Portal-wide settings.
    #[serde(default)]
    pub portal: PortalConfig,
    /// Document store settings.
    #[serde(default)]
    pub datastore: DatastoreConfig,
    /// Object storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Certificate watcher settings.
    #[serde(default)]
    pub watcher: WatcherConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `FACDEV_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FACDEV")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
