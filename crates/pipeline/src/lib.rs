//! Paylog - Pipeline
//!
//! The synchronous dispatcher that connects producers to sinks.
//!
//! # Architecture
//!
//! ```text
//! [Producers]                  [Pipeline]                  [Sinks]
//!    thread A ──┐                                       ┌──→ Console
//!    thread B ──┼──→ Logger ──→ &LogEvent fan-out ──────┼──→ Rolling file
//!    thread C ──┘                                       └──→ Payment CSV
//! ```
//!
//! # Key Design
//!
//! - **Explicit injection**: sinks are registered on the builder and owned by
//!   the pipeline. There is no ambient or global logger state.
//! - **Deliver everything**: every emitted event reaches every sink; no level
//!   filtering happens here. Each sink decides what to keep.
//! - **Log-and-continue**: a failing sink is logged and counted, never
//!   surfaced to the producer.
//! - **Explicit shutdown**: `Pipeline::close()` closes every owned sink in
//!   registration order. Events emitted afterwards are dropped.
//!
//! # Example
//!
//! ```ignore
//! use paylog_pipeline::Pipeline;
//! use paylog_events::{Level, LogEvent};
//!
//! let pipeline = Pipeline::builder()
//!     .sink(Box::new(console_sink))
//!     .sink(Box::new(csv_sink))
//!     .build();
//!
//! let logger = pipeline.logger();
//! logger.emit(LogEvent::new(Level::Info, "started"));
//!
//! pipeline.close();
//! ```

mod error;
mod logger;
mod metrics;
mod sink;

pub use error::SinkError;
pub use logger::{Logger, Pipeline, PipelineBuilder};
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use sink::Sink;

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;
