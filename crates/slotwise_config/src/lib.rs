// --- File: crates/slotwise_config/src/lib.rs ---
pub mod models;

pub use models::{AppConfig, HolidayDate, ScheduleConfig};

use config::{Config, ConfigError, Environment, File};

/// Loads the application configuration.
///
/// Sources, later layers override earlier ones:
/// 1. Built-in serde defaults (see `models.rs`).
/// 2. An optional config file named by `APP_CONFIG_FILE` (default
///    `config/default`, any format the `config` crate understands).
/// 3. Environment variables prefixed with `APP`, `__` as the nesting
///    separator, e.g. `APP_SCHEDULE__BUFFER_MINUTES=15`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config_file =
        std::env::var("APP_CONFIG_FILE").unwrap_or_else(|_| "config/default".to_string());

    let config = Config::builder()
        .add_source(File::with_name(&config_file).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    config.try_deserialize()
}
