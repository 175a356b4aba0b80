//! # duolog
//!
//! Named, leveled logging to a colored console and an optional append-only
//! file, serialized under a single write lock.
//!
//! ## Features
//!
//! - **Named Loggers**: each instance carries a sanitized display name
//! - **Dual Sinks**: console with per-level ANSI colors, plus a best-effort
//!   log file
//! - **Thread Safe**: one write lock per configuration keeps multi-line
//!   writes atomic across threads
//! - **Shared Configuration**: minimum level, log file, datetime format and
//!   colors live in a cloneable [`ConfigHandle`]
//!
//! ## Example
//!
//! ```
//! use duolog::prelude::*;
//!
//! let logger = Logger::with_config("Net", ConfigHandle::new()).unwrap();
//! logger.info("Connected");
//! ```
//!
//! Note: the file append happens while the write lock is held, so a stalled
//! filesystem stalls every logger sharing the configuration. Callers needing
//! non-blocking behavior must add it externally.

pub mod core;
pub mod macros;
pub(crate) mod sinks;

// Re-exported so callers and tests can name colors and drive color output
// without depending on `colored` themselves.
pub use colored;

pub mod prelude {
    pub use crate::core::{
        ConfigHandle, ConsoleWriter, LevelColors, LogLevel, Logger, LoggerError, Result,
        DEFAULT_DATETIME_FORMAT,
    };
    pub use colored::Color;
}

pub use core::{
    ConfigHandle, ConsoleWriter, LevelColors, LogLevel, Logger, LoggerError, Result,
    DEFAULT_DATETIME_FORMAT,
};
