//! Rolling File Sink - plaintext logs rotated by period
//!
//! Appends rendered event lines to `<dir>/<prefix>-<period>.log`, where the
//! period is the event's UTC day or hour. When an event lands in a new
//! period, the current file is flushed and the next one opened; files are
//! opened in append mode, so restarts within a period keep appending.
//!
//! # Output Format
//!
//! ```text
//! [2024-01-01T07:34:59.161Z] [INFO] Payment succeeded for user "alice"
//! [2024-01-01T07:35:02.080Z] [WARNING] Order "o-18" failed: "Out of stock"
//! ```
//!
//! Writes go through a `BufWriter` but each event is flushed, so a crash
//! loses at most the line being written.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use paylog_events::LogEvent;
use paylog_pipeline::{Sink, SinkError};

use crate::common::{MetricsSnapshot, SinkMetrics};

/// File rotation interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationInterval {
    /// One file per UTC hour
    Hourly,
    /// One file per UTC day
    Daily,
}

impl RotationInterval {
    /// Period key for a point in time; names the file and decides rotation
    pub fn period_key(&self, at: DateTime<Utc>) -> String {
        match self {
            RotationInterval::Hourly => at.format("%Y-%m-%d-%H").to_string(),
            RotationInterval::Daily => at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Configuration for the rolling file sink
#[derive(Debug, Clone)]
pub struct RollingFileConfig {
    /// Output directory, created at construction if missing
    pub dir: PathBuf,

    /// File name prefix
    pub prefix: String,

    /// Rotation interval
    pub interval: RotationInterval,
}

impl Default for RollingFileConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            prefix: "log".into(),
            interval: RotationInterval::Daily,
        }
    }
}

impl RollingFileConfig {
    /// Create config with a custom directory
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Create config with a custom file prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Create config with hourly rotation
    #[must_use]
    pub fn with_hourly_rotation(mut self) -> Self {
        self.interval = RotationInterval::Hourly;
        self
    }

    /// Create config with daily rotation
    #[must_use]
    pub fn with_daily_rotation(mut self) -> Self {
        self.interval = RotationInterval::Daily;
        self
    }

    fn file_path(&self, period: &str) -> PathBuf {
        self.dir.join(format!("{}-{}.log", self.prefix, period))
    }
}

/// Open writer plus the period it belongs to
struct RollState {
    writer: BufWriter<File>,
    period: String,
}

/// Rolling file sink for plaintext log storage
pub struct RollingFileSink {
    /// Sink name for logging
    name: String,

    /// Configuration, fixed at construction
    config: RollingFileConfig,

    /// Writer state; `None` once closed
    state: Mutex<Option<RollState>>,

    /// Metrics (Arc for sharing with callers)
    metrics: Arc<SinkMetrics>,
}

impl RollingFileSink {
    /// Create a new rolling file sink
    ///
    /// Creates the output directory and opens the file for the current
    /// period. Either failing is fatal: no sink is returned.
    pub fn new(config: RollingFileConfig) -> Result<Self, SinkError> {
        Self::with_name(config, "rolling_file")
    }

    /// Create a new rolling file sink with a custom name
    pub fn with_name(config: RollingFileConfig, name: impl Into<String>) -> Result<Self, SinkError> {
        std::fs::create_dir_all(&config.dir)
            .map_err(|source| SinkError::open(config.dir.display().to_string(), source))?;

        let period = config.interval.period_key(Utc::now());
        let writer = open_writer(&config.file_path(&period))?;

        let name = name.into();
        tracing::info!(sink = %name, dir = %config.dir.display(), "rolling file sink opened");

        Ok(Self {
            name,
            config,
            state: Mutex::new(Some(RollState { writer, period })),
            metrics: Arc::new(SinkMetrics::new()),
        })
    }

    /// Get snapshot of the sink's metrics
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Write one event, rotating first if its timestamp falls in a new period
    ///
    /// Rotation keys off the event timestamp, so replayed events land in the
    /// file for their own period.
    fn write_event(&self, event: &LogEvent) -> Result<(), SinkError> {
        let period = self.config.interval.period_key(event.timestamp());
        let line = format_line(event);

        let mut guard = self.state.lock();
        let state = guard.as_mut().ok_or(SinkError::Closed)?;

        if state.period != period {
            state.writer.flush()?;
            let next = open_writer(&self.config.file_path(&period))?;
            tracing::info!(
                sink = %self.name,
                from = %state.period,
                to = %period,
                "rotating log file"
            );
            state.writer = next;
            state.period = period;
        }

        if let Err(e) = state
            .writer
            .write_all(line.as_bytes())
            .and_then(|()| state.writer.flush())
        {
            self.metrics.record_error();
            return Err(e.into());
        }

        self.metrics.record_written(line.len() as u64);
        Ok(())
    }
}

impl Sink for RollingFileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        self.metrics.record_received();
        self.write_event(event)
    }

    fn close(&self) -> Result<(), SinkError> {
        let mut guard = self.state.lock();
        match guard.take() {
            Some(mut state) => {
                state.writer.flush()?;
                let snapshot = self.metrics.snapshot();
                tracing::info!(
                    sink = %self.name,
                    lines = snapshot.events_written,
                    bytes = snapshot.bytes_written,
                    errors = snapshot.write_errors,
                    "rolling file sink closed"
                );
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RollingFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingFileSink")
            .field("name", &self.name)
            .field("dir", &self.config.dir)
            .field("interval", &self.config.interval)
            .field("closed", &self.state.lock().is_none())
            .finish()
    }
}

/// Open a log file for append, creating it if missing
fn open_writer(path: &Path) -> Result<BufWriter<File>, SinkError> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| SinkError::open(path.display().to_string(), source))?;
    Ok(BufWriter::new(file))
}

/// Render one event to its output line (trailing newline included)
fn format_line(event: &LogEvent) -> String {
    format!(
        "[{}] [{}] {}\n",
        event.timestamp().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        event.level(),
        event.render_message(),
    )
}

#[cfg(test)]
#[path = "rolling_file_test.rs"]
mod rolling_file_test;
