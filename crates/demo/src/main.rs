//! Paylog demo - simulated payment traffic through the pipeline
//!
//! Wires the console, rolling file, and payment CSV sinks into a pipeline,
//! then runs the payment simulator against it.
//!
//! # Usage
//!
//! ```bash
//! # Run with the default configuration file (or built-in defaults)
//! paylog-demo
//! paylog-demo --config configs/config.toml
//!
//! # Override the attempt count and pin the RNG
//! paylog-demo --count 200 --seed 42
//! ```

mod simulator;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paylog_config::{Config, RollInterval};
use paylog_pipeline::Pipeline;
use paylog_sinks::{
    ConsoleConfig, ConsoleSink, PaymentCsvConfig, PaymentCsvSink, RollingFileConfig,
    RollingFileSink,
};

use crate::simulator::Simulator;

/// Paylog demo - simulated payment traffic through the pipeline
#[derive(Parser, Debug)]
#[command(name = "paylog-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "configs/config.toml")]
    config: PathBuf,

    /// Number of payment attempts (overrides the config file)
    #[arg(long)]
    count: Option<usize>,

    /// RNG seed for reproducible runs (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for internal diagnostics (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let mut config = load_config(&cli.config)?;
    if let Some(count) = cli.count {
        config.demo.payment_count = count;
    }
    if let Some(seed) = cli.seed {
        config.demo.seed = Some(seed);
    }

    let pipeline = build_pipeline(&config)?;
    tracing::info!(
        sink_count = pipeline.sink_count(),
        payment_count = config.demo.payment_count,
        "demo starting"
    );

    let logger = pipeline.logger();
    let mut simulator = Simulator::new(config.demo.seed);
    simulator.run(&logger, config.demo.payment_count);

    let snapshot = pipeline.close();
    tracing::info!(
        events_received = snapshot.events_received,
        events_delivered = snapshot.events_delivered,
        sink_errors = snapshot.sink_errors,
        "demo finished"
    );

    Ok(())
}

/// Load the config file, falling back to defaults when it doesn't exist
fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load(path).with_context(|| format!("loading config from {}", path.display()))
    } else {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}

/// Construct the pipeline from the enabled sink sections
fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let mut builder = Pipeline::builder();

    if config.sinks.console.enabled {
        let console_config = if config.sinks.console.color {
            ConsoleConfig::default()
        } else {
            ConsoleConfig::no_color()
        };
        builder = builder.sink(Box::new(ConsoleSink::new(console_config)));
    }

    if config.sinks.rolling_file.enabled {
        let rolling_config = RollingFileConfig::default()
            .with_dir(config.sinks.rolling_file.dir.clone())
            .with_prefix(config.sinks.rolling_file.prefix.clone());
        let rolling_config = match config.sinks.rolling_file.interval {
            RollInterval::Hourly => rolling_config.with_hourly_rotation(),
            RollInterval::Daily => rolling_config.with_daily_rotation(),
        };
        let sink = RollingFileSink::new(rolling_config).context("opening rolling file sink")?;
        builder = builder.sink(Box::new(sink));
    }

    if config.sinks.payment_csv.enabled {
        let csv_config =
            PaymentCsvConfig::default().with_path(config.sinks.payment_csv.path.clone());
        let sink = PaymentCsvSink::new(csv_config).context("opening payment csv sink")?;
        builder = builder.sink(Box::new(sink));
    }

    Ok(builder.build())
}

/// Initialize the tracing subscriber for internal diagnostics
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
