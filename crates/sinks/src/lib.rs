//! Paylog - Sinks
//!
//! Output sinks for the paylog pipeline. Each sink receives every emitted
//! event via `Sink::emit` and decides for itself what to persist.
//!
//! # Available Sinks
//!
//! | Sink | Purpose | Filters |
//! |------|---------|---------|
//! | `console` | Human-readable colored output | No |
//! | `rolling_file` | Plaintext logs, rotated by day or hour | No |
//! | `payment_csv` | Projects `PaymentProcessed` events to a CSV file | Yes |
//!
//! # Example
//!
//! ```ignore
//! use paylog_sinks::payment_csv::{PaymentCsvConfig, PaymentCsvSink};
//! use paylog_pipeline::Pipeline;
//!
//! let csv = PaymentCsvSink::new(PaymentCsvConfig::default().with_path("payments.csv"))?;
//! let pipeline = Pipeline::builder().sink(Box::new(csv)).build();
//! ```

/// Console sink - human-readable colored output
pub mod console;

/// Rolling file sink - plaintext logs rotated by period
pub mod rolling_file;

/// Payment CSV sink - projects payment events into a CSV file
pub mod payment_csv;

/// Common types shared by all sinks (metrics)
mod common;

pub use common::{MetricsSnapshot, SinkMetrics};

// Re-export main sink types for convenience
pub use console::{ConsoleConfig, ConsoleSink};
pub use payment_csv::{ColumnSpec, PaymentCsvConfig, PaymentCsvSink, PAYMENT_COLUMNS};
pub use rolling_file::{RollingFileConfig, RollingFileSink, RotationInterval};
