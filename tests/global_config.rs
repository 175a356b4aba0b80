//! Process-wide configuration surface
//!
//! The global handle is shared process state, so everything that touches it
//! lives in this one test. All other tests use isolated handles.

use duolog::colored::control::set_override;
use duolog::prelude::*;
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_static_configuration_surface() {
    set_override(false);
    let global = ConfigHandle::global();

    // Documented defaults
    assert_eq!(global.min_level(), LogLevel::Info);
    assert_eq!(global.log_file(), None);
    assert_eq!(global.datetime_format(), DEFAULT_DATETIME_FORMAT);

    // Invalid arguments fail fast and leave the defaults in place
    assert!(Logger::set_log_file("  ").is_err());
    assert!(Logger::set_datetime_format("").is_err());
    assert!(Logger::set_datetime_format("%Q").is_err());
    assert_eq!(global.log_file(), None);
    assert_eq!(global.datetime_format(), DEFAULT_DATETIME_FORMAT);

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("global.log");

    let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    global.set_console_writer(buffer.clone());

    Logger::set_log_file(path.to_str().unwrap()).expect("valid path");
    Logger::set_log_level(LogLevel::Warning);
    Logger::set_datetime_format("%Y-%m-%d %H:%M:%S").expect("valid format");

    // Per-level colors are independent process-wide properties too
    assert_eq!(
        Logger::level_color(LogLevel::Warning),
        LogLevel::Warning.default_color()
    );
    Logger::set_level_color(LogLevel::Warning, Color::Yellow);
    assert_eq!(Logger::level_color(LogLevel::Warning), Color::Yellow);
    assert_eq!(
        Logger::level_color(LogLevel::Error),
        LogLevel::Error.default_color()
    );
    Logger::set_fallback_color(Color::White);
    assert_eq!(Logger::fallback_color(), Color::White);

    // Both Logger::new and Logger::of write under the global settings
    let named = Logger::new("global").expect("valid name");
    let typed = Logger::of::<Vec<u8>>();

    named.info("filtered out");
    named.warning("kept");
    typed.error("typed logger");

    let console = String::from_utf8(buffer.lock().clone()).expect("UTF-8");
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] [global] [Warning] kept"));
    assert!(lines[1].contains("Vec<u8>"));
    assert!(lines[1].ends_with("] [Error] typed logger"));

    let file = fs::read_to_string(&path).expect("read log file");
    assert_eq!(file.lines().count(), 2);

    // Put the global handle back so a future test in this binary could not
    // trip over leaked state
    global.clear_log_file();
    global.clear_console_writer();
    global.set_min_level(LogLevel::Info);
    Logger::set_level_color(LogLevel::Warning, LogLevel::Warning.default_color());
    Logger::set_fallback_color(Color::TrueColor {
        r: 0xd3,
        g: 0xd3,
        b: 0xd3,
    });
    global
        .set_datetime_format(DEFAULT_DATETIME_FORMAT)
        .expect("default format is valid");
}
