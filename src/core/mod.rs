//! Core logger types

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;

pub use config::{ConfigHandle, ConsoleWriter, LevelColors, DEFAULT_DATETIME_FORMAT};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
