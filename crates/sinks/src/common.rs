//! Common types shared by all sinks
//!
//! One metrics shape fits every sink here: events seen, events written,
//! bytes written, write errors.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics shared by all sink types
#[derive(Debug, Default)]
pub struct SinkMetrics {
    /// Total events delivered to the sink
    events_received: AtomicU64,

    /// Events the sink actually wrote
    events_written: AtomicU64,

    /// Total bytes written
    bytes_written: AtomicU64,

    /// Write errors encountered
    write_errors: AtomicU64,
}

impl SinkMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            events_received: AtomicU64::new(0),
            events_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    /// Record an event delivered to the sink
    #[inline]
    pub fn record_received(&self) {
        self.events_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successfully written event
    #[inline]
    pub fn record_written(&self, bytes: u64) {
        self.events_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a write error
    #[inline]
    pub fn record_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_received: self.events_received.load(Ordering::Relaxed),
            events_written: self.events_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of sink metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub events_received: u64,
    pub events_written: u64,
    pub bytes_written: u64,
    pub write_errors: u64,
}

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;
