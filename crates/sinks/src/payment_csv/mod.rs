//! Payment CSV Sink - projects payment events into a CSV file
//!
//! Receives every event the pipeline emits, keeps only those whose
//! `EventType` property is `PaymentProcessed`, and appends one CSV row per
//! kept event with a fixed column order.
//!
//! # Output Format
//!
//! ```text
//! PaymentId,OrderId,UserId,Amount,Currency,Method,Status,ProcessedAt
//! 6b2f...,9c41...,alice,19.99,USD,CreditCard,Succeeded,2024-01-01T00:00:00Z
//! ```
//!
//! - The header line is written only when the file was empty at the moment
//!   the sink opened it; reopening a populated file never writes a second
//!   header.
//! - Every row has exactly one field per column; absent properties become
//!   empty strings, so positions stay fixed.
//! - Rendered values have one surrounding quote pair stripped (string
//!   properties render quoted).
//! - Values are not escaped: a value containing a comma or newline corrupts
//!   its row. Known limitation, kept as-is.
//!
//! # Concurrency
//!
//! The filter runs lock-free against the incoming event. Building and
//! appending the row happens under the writer mutex, so concurrent emits
//! never interleave partial lines, and `close` waits for in-flight writes.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use paylog_events::{LogEvent, Properties};
use paylog_pipeline::{Sink, SinkError};

use crate::common::{MetricsSnapshot, SinkMetrics};

/// The fixed payment projection columns, in row order
pub const PAYMENT_COLUMNS: [&str; 8] = [
    "PaymentId",
    "OrderId",
    "UserId",
    "Amount",
    "Currency",
    "Method",
    "Status",
    "ProcessedAt",
];

/// Property that selects events for projection
const EVENT_TYPE_PROPERTY: &str = "EventType";

/// Value of `EventType` that qualifies an event
const PAYMENT_PROCESSED: &str = "PaymentProcessed";

/// An ordered, immutable sequence of column names
///
/// Declared once at sink construction; defines both the CSV header and the
/// per-row field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    names: Vec<String>,
}

impl ColumnSpec {
    /// Create a spec from an ordered list of names
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The fixed payment projection spec
    pub fn payment() -> Self {
        Self::new(PAYMENT_COLUMNS)
    }

    /// Header line (no trailing newline)
    pub fn header(&self) -> String {
        self.names.join(",")
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of columns
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the spec has no columns
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Configuration for the payment CSV sink
#[derive(Debug, Clone)]
pub struct PaymentCsvConfig {
    /// Destination file path
    pub path: PathBuf,
}

impl Default for PaymentCsvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("payments.csv"),
        }
    }
}

impl PaymentCsvConfig {
    /// Create config with a custom destination path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// Sink that appends qualifying payment events as CSV rows
///
/// Owns one file handle for its lifetime: opened for append at
/// construction, released by `close`. The handle is unbuffered, so each
/// appended row reaches the OS before `emit` returns.
pub struct PaymentCsvSink {
    /// Sink name for logging
    name: String,

    /// Column order, fixed at construction
    columns: ColumnSpec,

    /// Writer state; `None` once closed
    writer: Mutex<Option<File>>,

    /// Metrics (Arc for sharing with callers)
    metrics: Arc<SinkMetrics>,
}

impl PaymentCsvSink {
    /// Open the sink against the configured path
    ///
    /// The file is created if missing and opened for append. If it is empty
    /// at that moment, the header line is written before any row. Open or
    /// header-write failure is fatal: no sink is returned.
    pub fn new(config: PaymentCsvConfig) -> Result<Self, SinkError> {
        Self::with_name(config, "payment_csv")
    }

    /// Open the sink with a custom name
    pub fn with_name(config: PaymentCsvConfig, name: impl Into<String>) -> Result<Self, SinkError> {
        let columns = ColumnSpec::payment();
        let path_str = config.path.display().to_string();

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&config.path)
            .map_err(|source| SinkError::open(path_str.clone(), source))?;

        let size = file
            .metadata()
            .map_err(|source| SinkError::open(path_str.clone(), source))?
            .len();
        if size == 0 {
            let mut header = columns.header();
            header.push('\n');
            file.write_all(header.as_bytes())
                .map_err(|source| SinkError::open(path_str.clone(), source))?;
        }

        let name = name.into();
        tracing::info!(sink = %name, path = %path_str, "payment csv sink opened");

        Ok(Self {
            name,
            columns,
            writer: Mutex::new(Some(file)),
            metrics: Arc::new(SinkMetrics::new()),
        })
    }

    /// Get a shareable handle to the sink's metrics
    pub fn metrics(&self) -> Arc<SinkMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Get snapshot of the sink's metrics
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Column order used for the header and every row
    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }
}

impl Sink for PaymentCsvSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        self.metrics.record_received();

        // Filter before taking the lock: only the event's own properties
        // matter here, no shared state.
        if !is_payment_processed(event) {
            return Ok(());
        }

        let mut line = resolve_row(&self.columns, event).join(",");
        line.push('\n');

        let mut guard = self.writer.lock();
        let file = guard.as_mut().ok_or(SinkError::Closed)?;
        if let Err(e) = file.write_all(line.as_bytes()) {
            self.metrics.record_error();
            return Err(e.into());
        }

        self.metrics.record_written(line.len() as u64);
        Ok(())
    }

    fn close(&self) -> Result<(), SinkError> {
        let mut guard = self.writer.lock();
        match guard.take() {
            Some(mut file) => {
                file.flush()?;
                let snapshot = self.metrics.snapshot();
                tracing::info!(
                    sink = %self.name,
                    rows = snapshot.events_written,
                    bytes = snapshot.bytes_written,
                    errors = snapshot.write_errors,
                    "payment csv sink closed"
                );
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for PaymentCsvSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentCsvSink")
            .field("name", &self.name)
            .field("columns", &self.columns.len())
            .field("closed", &self.writer.lock().is_none())
            .finish()
    }
}

/// Strip a single pair of surrounding double quotes, if present
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// True iff the event's `EventType` property, quote-stripped, is
/// `PaymentProcessed`. Absence of the property means no.
fn is_payment_processed<P: Properties>(event: &P) -> bool {
    event
        .lookup(EVENT_TYPE_PROPERTY)
        .map(|value| strip_quotes(&value) == PAYMENT_PROCESSED)
        .unwrap_or(false)
}

/// Resolve the column values for one row, in spec order
///
/// Present properties contribute their quote-stripped rendering; absent
/// ones contribute empty strings so field positions never shift.
fn resolve_row<P: Properties>(columns: &ColumnSpec, event: &P) -> Vec<String> {
    columns
        .names()
        .map(|name| {
            event
                .lookup(name)
                .map(|value| strip_quotes(&value).to_owned())
                .unwrap_or_default()
        })
        .collect()
}
