//! Sink trait - the pipeline's extension point
//!
//! A sink receives every event the pipeline dispatches and decides for
//! itself whether and how to persist it.

use paylog_events::LogEvent;

use crate::error::SinkError;

/// A consumer attached to the pipeline
///
/// # Contract
///
/// - `emit` may be invoked concurrently from multiple threads; implementors
///   serialize access to any shared writer state internally.
/// - The event reference is only valid for the duration of the call; sinks
///   must not retain it.
/// - `emit` after `close` returns `SinkError::Closed` rather than silently
///   doing nothing.
/// - `close` flushes and releases owned resources; it waits for in-flight
///   emits by taking the same lock the write path holds.
pub trait Sink: Send + Sync {
    /// Human-readable name for logging and diagnostics
    fn name(&self) -> &str;

    /// Deliver one event to the sink
    fn emit(&self, event: &LogEvent) -> Result<(), SinkError>;

    /// Flush and release the sink's resources
    ///
    /// Closing an already-closed sink is a no-op.
    fn close(&self) -> Result<(), SinkError>;
}
