use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::LISTING_WINDOW_DAYS;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub listing: ListingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Upper bound on the day count a caller may request from the
    /// windowed listing. The engine itself accepts any non-negative
    /// window; this cap is directory policy.
    pub max_window_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listing: ListingConfig {
                max_window_days: LISTING_WINDOW_DAYS,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml`. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("listing.max_window_days", LISTING_WINDOW_DAYS)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
