//! Paylog - Configuration
//!
//! TOML-backed configuration for the demo binary. Every field has a default,
//! so an empty file (or no file at all) yields a working setup.
//!
//! # Example
//!
//! ```toml
//! [demo]
//! payment_count = 50
//!
//! [sinks.console]
//! color = true
//!
//! [sinks.rolling_file]
//! dir = "logs"
//! interval = "daily"
//!
//! [sinks.payment_csv]
//! path = "payments.csv"
//! ```

mod demo;
mod error;
mod sinks;

pub use demo::DemoConfig;
pub use error::ConfigError;
pub use sinks::{
    ConsoleSinkConfig, PaymentCsvSinkConfig, RollInterval, RollingFileSinkConfig, SinksConfig,
};

use std::path::Path;

use serde::Deserialize;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Simulation settings
    pub demo: DemoConfig,

    /// Sink settings
    pub sinks: SinksConfig,
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&raw)
    }

    /// Parse and validate configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults can't express
    pub fn validate(&self) -> Result<()> {
        if self.sinks.payment_csv.enabled && self.sinks.payment_csv.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("sinks.payment_csv.path must not be empty"));
        }
        if self.sinks.rolling_file.enabled {
            if self.sinks.rolling_file.dir.as_os_str().is_empty() {
                return Err(ConfigError::invalid("sinks.rolling_file.dir must not be empty"));
            }
            if self.sinks.rolling_file.prefix.is_empty() {
                return Err(ConfigError::invalid("sinks.rolling_file.prefix must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.demo.payment_count, 50);
        assert!(config.sinks.console.enabled);
        assert!(config.sinks.rolling_file.enabled);
        assert!(config.sinks.payment_csv.enabled);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_str(
            r#"
[demo]
payment_count = 10

[sinks.payment_csv]
path = "out/payments.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.demo.payment_count, 10);
        assert_eq!(
            config.sinks.payment_csv.path,
            std::path::PathBuf::from("out/payments.csv")
        );
        // Untouched sections keep defaults
        assert!(config.sinks.console.color);
        assert_eq!(config.sinks.rolling_file.prefix, "log");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Config::from_str("[demo]\nunknown_knob = 1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_csv_path_is_rejected() {
        let result = Config::from_str("[sinks.payment_csv]\npath = \"\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_disabled_sink_skips_validation() {
        let config = Config::from_str("[sinks.payment_csv]\nenabled = false\npath = \"\"\n").unwrap();
        assert!(!config.sinks.payment_csv.enabled);
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        let result = Config::load("/nonexistent/paylog.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
