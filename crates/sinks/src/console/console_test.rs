use super::*;

use chrono::{DateTime, Utc};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid timestamp")
}

#[test]
fn test_config_defaults() {
    let config = ConsoleConfig::default();
    assert!(config.color);
}

#[test]
fn test_config_no_color() {
    let config = ConsoleConfig::no_color();
    assert!(!config.color);
}

#[test]
fn test_sink_creation() {
    let sink = ConsoleSink::new(ConsoleConfig::default());
    assert_eq!(sink.name(), "console");
    assert_eq!(sink.metrics_snapshot().events_received, 0);
}

#[test]
fn test_sink_with_custom_name() {
    let sink = ConsoleSink::with_name(ConsoleConfig::default(), "debug_console");
    assert_eq!(sink.name(), "debug_console");
}

#[test]
fn test_format_line_without_color() {
    let sink = ConsoleSink::new(ConsoleConfig::no_color());
    let event = LogEvent::at(
        ts("2024-01-01T07:34:59.161Z"),
        Level::Info,
        "Payment succeeded for user {UserId}",
    )
    .with("UserId", "alice");

    assert_eq!(
        sink.format_line(&event),
        "07:34:59.161 INFO    Payment succeeded for user \"alice\"\n"
    );
}

#[test]
fn test_format_line_pads_level() {
    let sink = ConsoleSink::new(ConsoleConfig::no_color());
    let event = LogEvent::at(ts("2024-01-01T00:00:00Z"), Level::Warning, "w");
    assert_eq!(sink.format_line(&event), "00:00:00.000 WARNING w\n");
}

#[test]
fn test_emit_counts_events() {
    let sink = ConsoleSink::new(ConsoleConfig::no_color());
    sink.emit(&LogEvent::new(Level::Info, "one")).expect("emit failed");
    sink.emit(&LogEvent::new(Level::Info, "two")).expect("emit failed");

    let snapshot = sink.metrics_snapshot();
    assert_eq!(snapshot.events_received, 2);
    assert_eq!(snapshot.events_written, 2);
}

#[test]
fn test_emit_after_close_is_an_error() {
    let sink = ConsoleSink::new(ConsoleConfig::no_color());
    sink.close().expect("close failed");

    let result = sink.emit(&LogEvent::new(Level::Info, "late"));
    assert!(matches!(result, Err(SinkError::Closed)));
}

#[test]
fn test_double_close_is_a_noop() {
    let sink = ConsoleSink::new(ConsoleConfig::no_color());
    sink.close().expect("first close failed");
    sink.close().expect("second close failed");
}
