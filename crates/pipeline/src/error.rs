//! Sink error types
//!
//! One taxonomy shared by every sink implementation:
//! - `Config` / `Open` are construction-time failures and fatal
//! - `Write` is an emit-time I/O failure, handled by the pipeline's
//!   log-and-continue policy
//! - `Closed` reports use after close

use thiserror::Error;

/// Errors raised by sinks
#[derive(Debug, Error)]
pub enum SinkError {
    /// Sink configuration is unusable
    #[error("sink configuration error: {0}")]
    Config(String),

    /// Destination could not be opened for append
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An append or flush failed
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),

    /// Emit was called after the sink was closed
    #[error("sink is closed")]
    Closed,
}

impl SinkError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an open error for the given path
    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
