//! Dispatch metrics
//!
//! Atomic counters for the pipeline's fan-out path, with point-in-time
//! snapshots for shutdown logging and tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for event dispatch
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Total events handed to the logger
    events_received: AtomicU64,

    /// Events accepted by at least one sink
    events_delivered: AtomicU64,

    /// Events delivered to no sink (all sinks failed, or pipeline closed)
    events_dropped: AtomicU64,

    /// Individual sink emit failures
    sink_errors: AtomicU64,
}

impl DispatchMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            events_received: AtomicU64::new(0),
            events_delivered: AtomicU64::new(0),
            events_dropped: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    /// Record an event handed to the logger
    #[inline]
    pub fn record_received(&self) {
        self.events_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an event accepted by at least one sink
    #[inline]
    pub fn record_delivered(&self) {
        self.events_delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an event that reached no sink
    #[inline]
    pub fn record_dropped(&self) {
        self.events_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a single sink emit failure
    #[inline]
    pub fn record_sink_error(&self) {
        self.sink_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_received: self.events_received.load(Ordering::Relaxed),
            events_delivered: self.events_delivered.load(Ordering::Relaxed),
            events_dropped: self.events_dropped.load(Ordering::Relaxed),
            sink_errors: self.sink_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of dispatch metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub events_received: u64,
    pub events_delivered: u64,
    pub events_dropped: u64,
    pub sink_errors: u64,
}
