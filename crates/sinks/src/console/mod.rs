//! Console Sink - human-readable colored output
//!
//! Renders every event to stdout with the message template expanded against
//! the property bag. Not intended for high-throughput production use.
//!
//! # Example Output
//!
//! ```text
//! 07:34:59.161 INFO    Payment succeeded for user "alice" and order "o-17"
//! 07:34:59.162 WARNING Order "o-18" failed: "Out of stock"
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use owo_colors::{OwoColorize, Style};

use paylog_events::{Level, LogEvent};
use paylog_pipeline::{Sink, SinkError};

use crate::common::{MetricsSnapshot, SinkMetrics};

/// Configuration for the console sink
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Enable colored output
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ConsoleConfig {
    /// Create config with colors disabled (for piped output)
    pub fn no_color() -> Self {
        Self { color: false }
    }
}

/// Color styles for terminal output
struct Styles {
    timestamp: Style,
}

impl Styles {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                timestamp: Style::new().dimmed(),
            }
        } else {
            Self {
                timestamp: Style::new(),
            }
        }
    }
}

/// Get style for an event level
fn level_style(level: Level, enabled: bool) -> Style {
    if !enabled {
        return Style::new();
    }
    match level {
        Level::Fatal | Level::Error => Style::new().red(),
        Level::Warning => Style::new().yellow(),
        Level::Info | Level::Debug => Style::new(),
        Level::Trace => Style::new().dimmed(),
    }
}

/// Console sink for human-readable output
pub struct ConsoleSink {
    /// Sink name for logging
    name: String,

    /// Configuration
    config: ConsoleConfig,

    /// Color styles, derived from config once
    styles: Styles,

    /// Set by close; later emits are reported
    closed: AtomicBool,

    /// Metrics (Arc for sharing with callers)
    metrics: Arc<SinkMetrics>,
}

impl ConsoleSink {
    /// Create a new console sink
    pub fn new(config: ConsoleConfig) -> Self {
        Self::with_name(config, "console")
    }

    /// Create a new console sink with a custom name
    pub fn with_name(config: ConsoleConfig, name: impl Into<String>) -> Self {
        let styles = Styles::new(config.color);
        Self {
            name: name.into(),
            config,
            styles,
            closed: AtomicBool::new(false),
            metrics: Arc::new(SinkMetrics::new()),
        }
    }

    /// Get snapshot of the sink's metrics
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Render one event to its output line (trailing newline included)
    fn format_line(&self, event: &LogEvent) -> String {
        let timestamp = event.timestamp().format("%H:%M:%S%.3f");
        let level = format!("{:<7}", event.level().as_str());
        format!(
            "{} {} {}\n",
            timestamp.style(self.styles.timestamp),
            level.style(level_style(event.level(), self.config.color)),
            event.render_message(),
        )
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        self.metrics.record_received();

        if self.closed.load(Ordering::Acquire) {
            return Err(SinkError::Closed);
        }

        let line = self.format_line(event);
        // The lock keeps concurrent emits from interleaving within a line.
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(line.as_bytes()) {
            self.metrics.record_error();
            return Err(e.into());
        }

        self.metrics.record_written(line.len() as u64);
        Ok(())
    }

    fn close(&self) -> Result<(), SinkError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        io::stdout().lock().flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("name", &self.name)
            .field("color", &self.config.color)
            .field("closed", &self.closed.load(Ordering::Acquire))
            .finish()
    }
}

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;
