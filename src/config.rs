//! Application configuration loading and validation.
//!
//! Every section is optional; an empty file (or no file at all) gives the
//! built-in lookup tables and `info` logging in pretty format.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [lookup.sports]
//! Tennis = "Tenis"
//!
//! [lookup.bookmaker_urls]
//! WilliamHillES = "https://www.williamhill.es/"
//! ```

mod logging;
mod lookup;

pub use logging::{LoggingConfig, LOG_FORMATS};
pub use lookup::LookupConfig;

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::transform::Transformer;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Additional sport translations and default bookmaker links.
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Transformer using the configured lookup tables.
    #[must_use]
    pub fn transformer(&self) -> Transformer {
        Transformer::new(self.lookup.to_lookup())
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        for (sport, display) in &self.lookup.sports {
            if sport.trim().is_empty() || display.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "sports",
                    reason: format!("empty entry {sport:?} = {display:?}"),
                }
                .into());
            }
        }

        for (bookmaker, url) in &self.lookup.bookmaker_urls {
            if bookmaker.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "bookmaker_urls",
                    reason: "bookmaker name cannot be empty".to_string(),
                }
                .into());
            }
            if !url.starts_with("http") {
                return Err(ConfigError::InvalidValue {
                    field: "bookmaker_urls",
                    reason: format!("{bookmaker}: url must start with http, got {url:?}"),
                }
                .into());
            }
        }

        Ok(())
    }
}
