use super::*;

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use paylog_events::Level;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid timestamp")
}

// =============================================================================
// Config tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = RollingFileConfig::default();
    assert_eq!(config.dir, PathBuf::from("logs"));
    assert_eq!(config.prefix, "log");
    assert_eq!(config.interval, RotationInterval::Daily);
}

#[test]
fn test_config_chained_builders() {
    let config = RollingFileConfig::default()
        .with_dir("/data/logs")
        .with_prefix("app")
        .with_hourly_rotation();

    assert_eq!(config.dir, PathBuf::from("/data/logs"));
    assert_eq!(config.prefix, "app");
    assert_eq!(config.interval, RotationInterval::Hourly);
}

#[test]
fn test_period_keys() {
    let at = ts("2024-06-15T08:30:45Z");
    assert_eq!(RotationInterval::Daily.period_key(at), "2024-06-15");
    assert_eq!(RotationInterval::Hourly.period_key(at), "2024-06-15-08");
}

#[test]
fn test_file_path_layout() {
    let config = RollingFileConfig::default().with_dir("logs").with_prefix("app");
    assert_eq!(config.file_path("2024-06-15"), PathBuf::from("logs/app-2024-06-15.log"));
}

// =============================================================================
// Write tests
// =============================================================================

#[test]
fn test_creates_directory_and_writes_line() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let logs = dir.path().join("nested").join("logs");
    let sink = RollingFileSink::new(RollingFileConfig::default().with_dir(&logs))
        .expect("failed to open sink");

    let event = LogEvent::at(ts("2024-06-15T08:30:45.123Z"), Level::Info, "started {Port}")
        .with("Port", 8080);
    sink.emit(&event).expect("emit failed");
    sink.close().expect("close failed");

    let content = std::fs::read_to_string(logs.join("log-2024-06-15.log")).expect("read failed");
    assert_eq!(content, "[2024-06-15T08:30:45.123Z] [INFO] started 8080\n");
}

#[test]
fn test_lines_append_within_a_period() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let sink = RollingFileSink::new(RollingFileConfig::default().with_dir(dir.path()))
        .expect("failed to open sink");

    let when = ts("2024-06-15T10:00:00Z");
    sink.emit(&LogEvent::at(when, Level::Info, "one")).expect("emit failed");
    sink.emit(&LogEvent::at(when, Level::Warning, "two")).expect("emit failed");
    sink.close().expect("close failed");

    let content =
        std::fs::read_to_string(dir.path().join("log-2024-06-15.log")).expect("read failed");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] one"));
    assert!(lines[1].ends_with("[WARNING] two"));
}

#[test]
fn test_rotates_when_period_changes() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let sink = RollingFileSink::new(
        RollingFileConfig::default()
            .with_dir(dir.path())
            .with_hourly_rotation(),
    )
    .expect("failed to open sink");

    sink.emit(&LogEvent::at(ts("2024-06-15T08:59:59Z"), Level::Info, "before"))
        .expect("emit failed");
    sink.emit(&LogEvent::at(ts("2024-06-15T09:00:01Z"), Level::Info, "after"))
        .expect("emit failed");
    sink.close().expect("close failed");

    let before = std::fs::read_to_string(dir.path().join("log-2024-06-15-08.log"))
        .expect("read failed");
    let after = std::fs::read_to_string(dir.path().join("log-2024-06-15-09.log"))
        .expect("read failed");
    assert!(before.contains("before"));
    assert!(after.contains("after"));
}

#[test]
fn test_reopen_appends_within_same_period() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let when = ts("2024-06-15T10:00:00Z");

    let sink = RollingFileSink::new(RollingFileConfig::default().with_dir(dir.path()))
        .expect("failed to open sink");
    sink.emit(&LogEvent::at(when, Level::Info, "first run")).expect("emit failed");
    sink.close().expect("close failed");

    let sink = RollingFileSink::new(RollingFileConfig::default().with_dir(dir.path()))
        .expect("failed to open sink");
    sink.emit(&LogEvent::at(when, Level::Info, "second run")).expect("emit failed");
    sink.close().expect("close failed");

    let content =
        std::fs::read_to_string(dir.path().join("log-2024-06-15.log")).expect("read failed");
    assert_eq!(content.lines().count(), 2);
}

// =============================================================================
// Lifecycle tests
// =============================================================================

#[test]
fn test_emit_after_close_is_an_error() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let sink = RollingFileSink::new(RollingFileConfig::default().with_dir(dir.path()))
        .expect("failed to open sink");

    sink.close().expect("close failed");
    let result = sink.emit(&LogEvent::new(Level::Info, "late"));
    assert!(matches!(result, Err(SinkError::Closed)));
}

#[test]
fn test_metrics_track_lines_and_bytes() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let sink = RollingFileSink::new(RollingFileConfig::default().with_dir(dir.path()))
        .expect("failed to open sink");

    sink.emit(&LogEvent::new(Level::Info, "hello")).expect("emit failed");

    let snapshot = sink.metrics_snapshot();
    assert_eq!(snapshot.events_received, 1);
    assert_eq!(snapshot.events_written, 1);
    assert!(snapshot.bytes_written > 0);
    sink.close().expect("close failed");
}
