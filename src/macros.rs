//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use duolog::prelude::*;
//! use duolog::info;
//!
//! let logger = Logger::with_config("net", ConfigHandle::new()).unwrap();
//!
//! // Basic logging
//! info!(logger, "Connected");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = Logger::with_config("app", ConfigHandle::new()).unwrap();
/// use duolog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write(format!($($arg)+), $level)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an important-level message.
#[macro_export]
macro_rules! important {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Important, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ConfigHandle, LogLevel, Logger};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn capture(config: &ConfigHandle) -> Arc<Mutex<Vec<u8>>> {
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        config.set_console_writer(buffer.clone());
        buffer
    }

    #[test]
    fn test_log_macro() {
        colored::control::set_override(false);
        let config = ConfigHandle::new();
        let buffer = capture(&config);
        let logger = Logger::with_config("macros", config).unwrap();

        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let output = String::from_utf8(buffer.lock().clone()).unwrap();
        assert!(output.contains("[macros] [Info] Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        colored::control::set_override(false);
        let config = ConfigHandle::new();
        config.set_min_level(LogLevel::Debug);
        let buffer = capture(&config);
        let logger = Logger::with_config("macros", config).unwrap();

        debug!(logger, "d {}", 1);
        info!(logger, "i {}", 2);
        warning!(logger, "w {}", 3);
        error!(logger, "e {}", 4);
        important!(logger, "m {}", 5);
        critical!(logger, "c {}", 6);

        let output = String::from_utf8(buffer.lock().clone()).unwrap();
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("[Debug] d 1"));
        assert!(output.contains("[Critical] c 6"));
    }
}
