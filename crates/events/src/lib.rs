//! Paylog - Events
//!
//! Core structured event types that flow through the pipeline:
//! - `LogEvent` - a timestamped record with a level, a message template, and
//!   a bag of named, typed properties
//! - `Value` - a typed property value with a stable string rendering
//! - `Level` - event severity (no filtering happens anywhere in the pipeline)
//! - `Properties` - the read-only lookup contract sinks consume
//!
//! # Design Principles
//!
//! - **Transient events**: a `LogEvent` lives for the duration of one emit
//!   call; sinks receive `&LogEvent` and must not retain references.
//! - **Render on the event side**: sinks only ever see strings. `Properties`
//!   hands out rendered values, so no sink needs to know the `Value` variants.
//! - **Insertion order preserved**: the property bag keeps the order in which
//!   properties were attached, and setting a name twice overwrites in place.

mod event;
mod level;
mod value;

pub use event::{LogEvent, Properties};
pub use level::Level;
pub use value::Value;
