//! Runtime configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `delivery.yaml` in the current directory (if present)
//! 3. the file passed to [`Config::load`] (if any)
//! 4. `DELIVERY__*` environment variables, e.g. `DELIVERY__PROMOTION_DAYS=14`

use serde::Deserialize;

/// Default configuration file name, without extension.
pub const DEFAULT_CONFIG_FILE: &str = "delivery";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "DELIVERY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mailbox size of every store actor.
    pub mailbox_size: usize,
    /// Events buffered per subscriber on each channel before the oldest are skipped.
    pub event_capacity: usize,
    /// How long a paid promotion lasts.
    pub promotion_days: i64,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            event_capacity: 128,
            promotion_days: 7,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        use config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder =
            ConfigLib::builder().add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
