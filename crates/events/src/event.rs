//! LogEvent - the structured record that flows through the pipeline
//!
//! A `LogEvent` is built by a producer, handed to the `Logger`, delivered to
//! every sink as a shared reference, and dropped. Sinks must not retain
//! references beyond the emit call.

use chrono::{DateTime, Utc};

use crate::level::Level;
use crate::value::Value;

/// Read-only lookup of named values on an event
///
/// This is the only contract file sinks consume: a name either resolves to
/// the property's rendered string form or to nothing. Rendering lives with
/// `Value`, so implementors of this trait decide nothing about formatting.
pub trait Properties {
    /// Look up a property by name, rendered to its string form
    fn lookup(&self, name: &str) -> Option<String>;
}

/// A timestamped structured event
///
/// The property bag preserves insertion order; attaching a value under an
/// existing name overwrites in place rather than appending a duplicate.
///
/// # Example
///
/// ```
/// use paylog_events::{Level, LogEvent};
///
/// let event = LogEvent::new(Level::Info, "Payment succeeded for user {UserId}")
///     .with("UserId", "alice")
///     .with("Amount", 19.99);
///
/// assert_eq!(event.render_message(), "Payment succeeded for user \"alice\"");
/// ```
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Capture time, set when the event is constructed
    timestamp: DateTime<Utc>,

    /// Event severity
    level: Level,

    /// Message template with `{Name}` placeholders
    template: String,

    /// Named properties in insertion order
    properties: Vec<(String, Value)>,
}

impl LogEvent {
    /// Create an event stamped with the current time
    pub fn new(level: Level, template: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, template)
    }

    /// Create an event with an explicit timestamp
    ///
    /// Useful for replaying recorded events; the demo and tests use it to
    /// pin rendered output.
    pub fn at(timestamp: DateTime<Utc>, level: Level, template: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            template: template.into(),
            properties: Vec::new(),
        }
    }

    /// Attach a property, overwriting any existing value under the same name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    /// Capture time of the event
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Event severity
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Raw message template, placeholders unexpanded
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Get a property's typed value by name
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterate over all properties in insertion order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of attached properties
    #[inline]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Render the message template against the property bag
    ///
    /// `{Name}` placeholders are replaced with the property's rendered value.
    /// Placeholders that don't resolve, and unbalanced braces, are left
    /// verbatim.
    pub fn render_message(&self) -> String {
        let mut out = String::with_capacity(self.template.len() + 16);
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match self.property(name) {
                        Some(value) => out.push_str(&value.render()),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl Properties for LogEvent {
    fn lookup(&self, name: &str) -> Option<String> {
        self.property(name).map(Value::render)
    }
}
