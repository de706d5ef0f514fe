//! Pipeline and Logger - ownership and fan-out
//!
//! The `Pipeline` owns the sinks; the `Logger` is the cheap, cloneable handle
//! producers use to emit events. Both share the same inner state, so a
//! `Logger` stays valid (but delivers nothing) after the pipeline closes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use paylog_events::LogEvent;

use crate::metrics::{DispatchMetrics, MetricsSnapshot};
use crate::sink::Sink;

/// Shared state behind `Pipeline` and every `Logger` clone
struct Inner {
    /// Sinks in registration order
    sinks: Vec<Box<dyn Sink>>,

    /// Set once by `close()`; emits afterwards are dropped
    closed: AtomicBool,

    /// Dispatch counters
    metrics: DispatchMetrics,
}

/// Builder for assembling a pipeline
///
/// Sinks are injected explicitly and delivered to in registration order.
#[derive(Default)]
pub struct PipelineBuilder {
    sinks: Vec<Box<dyn Sink>>,
}

impl PipelineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink
    ///
    /// Every emitted event will be delivered to it, regardless of level.
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn Sink>) -> Self {
        tracing::debug!(sink = %sink.name(), "registered sink with pipeline");
        self.sinks.push(sink);
        self
    }

    /// Finish building
    pub fn build(self) -> Pipeline {
        tracing::info!(sink_count = self.sinks.len(), "pipeline starting");
        Pipeline {
            inner: Arc::new(Inner {
                sinks: self.sinks,
                closed: AtomicBool::new(false),
                metrics: DispatchMetrics::new(),
            }),
        }
    }
}

/// Owner of the sinks and the shutdown path
pub struct Pipeline {
    inner: Arc<Inner>,
}

impl Pipeline {
    /// Start building a pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Get a producer-facing handle
    ///
    /// Handles are cheap to clone and safe to share across threads.
    pub fn logger(&self) -> Logger {
        Logger {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of registered sinks
    pub fn sink_count(&self) -> usize {
        self.inner.sinks.len()
    }

    /// Get the current dispatch metrics
    #[inline]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.metrics.snapshot()
    }

    /// Close the pipeline and every owned sink, in registration order
    ///
    /// Emits that arrive after this point are dropped. Per-sink close
    /// failures are logged and do not stop the remaining sinks from closing.
    /// Returns the final dispatch snapshot.
    pub fn close(self) -> MetricsSnapshot {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return self.inner.metrics.snapshot();
        }

        for sink in &self.inner.sinks {
            if let Err(e) = sink.close() {
                tracing::warn!(sink = %sink.name(), error = %e, "sink close failed");
            }
        }

        let snapshot = self.inner.metrics.snapshot();
        tracing::info!(
            events_received = snapshot.events_received,
            events_delivered = snapshot.events_delivered,
            events_dropped = snapshot.events_dropped,
            sink_errors = snapshot.sink_errors,
            "pipeline shutting down"
        );

        snapshot
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("sink_count", &self.sink_count())
            .field("closed", &self.inner.closed.load(Ordering::Acquire))
            .finish()
    }
}

/// Producer-facing emit handle
///
/// Cloning shares the underlying pipeline state.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    /// Deliver one event to every registered sink
    ///
    /// A failing sink is logged and counted; the producer never sees the
    /// error. Returns the number of sinks that accepted the event.
    pub fn emit(&self, event: LogEvent) -> usize {
        self.inner.metrics.record_received();

        if self.inner.closed.load(Ordering::Acquire) {
            self.inner.metrics.record_dropped();
            tracing::debug!("pipeline closed, dropping event");
            return 0;
        }

        let mut delivered = 0;
        for sink in &self.inner.sinks {
            match sink.emit(&event) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    self.inner.metrics.record_sink_error();
                    tracing::warn!(sink = %sink.name(), error = %e, "sink emit failed");
                }
            }
        }

        if delivered > 0 {
            self.inner.metrics.record_delivered();
        } else {
            self.inner.metrics.record_dropped();
        }

        delivered
    }

    /// Get the current dispatch metrics
    #[inline]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.metrics.snapshot()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("sink_count", &self.inner.sinks.len())
            .field("closed", &self.inner.closed.load(Ordering::Acquire))
            .finish()
    }
}
