//! Sink configuration types
//!
//! One section per sink; each can be disabled independently. The demo maps
//! these onto the concrete sink configs at wiring time.

use std::path::PathBuf;

use serde::Deserialize;

/// Container for all sink configurations
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinksConfig {
    /// Console output
    pub console: ConsoleSinkConfig,

    /// Rolling plaintext log file
    pub rolling_file: RollingFileSinkConfig,

    /// Payment CSV projection
    pub payment_csv: PaymentCsvSinkConfig,
}

/// Console sink settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleSinkConfig {
    /// Whether the sink is wired into the pipeline
    pub enabled: bool,

    /// Colored output
    pub color: bool,
}

impl Default for ConsoleSinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: true,
        }
    }
}

/// Rolling file sink settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RollingFileSinkConfig {
    /// Whether the sink is wired into the pipeline
    pub enabled: bool,

    /// Output directory
    pub dir: PathBuf,

    /// File name prefix
    pub prefix: String,

    /// Rotation interval
    pub interval: RollInterval,
}

impl Default for RollingFileSinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from("logs"),
            prefix: "log".into(),
            interval: RollInterval::Daily,
        }
    }
}

/// Rotation interval, as written in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollInterval {
    Hourly,
    #[default]
    Daily,
}

/// Payment CSV sink settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaymentCsvSinkConfig {
    /// Whether the sink is wired into the pipeline
    pub enabled: bool,

    /// Destination CSV file
    pub path: PathBuf,
}

impl Default for PaymentCsvSinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("payments.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SinksConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.color);
        assert_eq!(config.rolling_file.dir, PathBuf::from("logs"));
        assert_eq!(config.rolling_file.interval, RollInterval::Daily);
        assert_eq!(config.payment_csv.path, PathBuf::from("payments.csv"));
    }

    #[test]
    fn test_deserialize_interval() {
        let config: RollingFileSinkConfig = toml::from_str("interval = \"hourly\"").unwrap();
        assert_eq!(config.interval, RollInterval::Hourly);
    }

    #[test]
    fn test_deserialize_bad_interval() {
        let result: Result<RollingFileSinkConfig, _> = toml::from_str("interval = \"weekly\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_disabled_console() {
        let config: ConsoleSinkConfig = toml::from_str("enabled = false").unwrap();
        assert!(!config.enabled);
        assert!(config.color);
    }
}
