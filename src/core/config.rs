//! Shared logger configuration
//!
//! All loggers attached to the same [`ConfigHandle`] share one mutable
//! configuration (minimum level, log file, datetime format, colors) and one
//! write lock. [`ConfigHandle::global`] is the process-wide instance used by
//! [`Logger::new`](crate::Logger::new); tests construct isolated handles via
//! [`ConfigHandle::new`] so they never observe each other's settings.

use crate::core::error::{LoggerError, Result};
use crate::core::log_level::LogLevel;
use chrono::format::{Item, StrftimeItems};
use colored::Color;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Datetime format in effect until `set_datetime_format` replaces it
/// (day/month/year, 24h time, UTC offset).
pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S%:z";

/// Console writer override, used to capture console output in tests.
pub type ConsoleWriter = Arc<Mutex<dyn Write + Send>>;

/// Per-level console colors, independently settable, with a fallback color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelColors {
    debug: Color,
    info: Color,
    warning: Color,
    error: Color,
    important: Color,
    critical: Color,
    fallback: Color,
}

impl LevelColors {
    /// Colors as documented on [`LogLevel::default_color`]; the fallback is
    /// light gray (`#d3d3d3`).
    pub fn new() -> Self {
        Self {
            debug: LogLevel::Debug.default_color(),
            info: LogLevel::Info.default_color(),
            warning: LogLevel::Warning.default_color(),
            error: LogLevel::Error.default_color(),
            important: LogLevel::Important.default_color(),
            critical: LogLevel::Critical.default_color(),
            fallback: Color::TrueColor { r: 0xd3, g: 0xd3, b: 0xd3 },
        }
    }

    pub fn get(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Debug => self.debug,
            LogLevel::Info => self.info,
            LogLevel::Warning => self.warning,
            LogLevel::Error => self.error,
            LogLevel::Important => self.important,
            LogLevel::Critical => self.critical,
        }
    }

    pub fn set(&mut self, level: LogLevel, color: Color) {
        match level {
            LogLevel::Debug => self.debug = color,
            LogLevel::Info => self.info = color,
            LogLevel::Warning => self.warning = color,
            LogLevel::Error => self.error = color,
            LogLevel::Important => self.important = color,
            LogLevel::Critical => self.critical = color,
        }
    }

    /// Color used when no level-specific color applies.
    pub fn fallback(&self) -> Color {
        self.fallback
    }

    pub fn set_fallback(&mut self, color: Color) {
        self.fallback = color;
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable configuration state behind a [`ConfigHandle`].
struct LogConfig {
    min_level: LogLevel,
    log_file: Option<PathBuf>,
    datetime_format: String,
    colors: LevelColors,
    console: Option<ConsoleWriter>,
}

impl LogConfig {
    fn new() -> Self {
        Self {
            min_level: LogLevel::default(),
            log_file: None,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            colors: LevelColors::new(),
            console: None,
        }
    }
}

/// Settings read once at the start of a write call. A reconfiguration racing
/// the write takes effect on the next call, never mid-call.
pub(crate) struct Snapshot {
    pub(crate) min_level: LogLevel,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) datetime_format: String,
    pub(crate) colors: LevelColors,
    pub(crate) console: Option<ConsoleWriter>,
}

struct Shared {
    state: RwLock<LogConfig>,
    // Serializes the whole dual-sink write, including the blocking file
    // append. A stalled filesystem stalls every logger on this handle.
    write_lock: Mutex<()>,
}

/// Cloneable handle to a shared configuration and its write lock.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<Shared>,
}

static GLOBAL: OnceLock<ConfigHandle> = OnceLock::new();

impl ConfigHandle {
    /// Create an isolated configuration with the documented defaults:
    /// minimum level `Info`, no log file, [`DEFAULT_DATETIME_FORMAT`],
    /// default colors.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Shared {
                state: RwLock::new(LogConfig::new()),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// The process-wide configuration used by loggers constructed without an
    /// explicit handle.
    pub fn global() -> Self {
        GLOBAL.get_or_init(ConfigHandle::new).clone()
    }

    /// Set the log file target. The path must resolve syntactically to an
    /// absolute form; the file itself is not created or probed until the
    /// first write.
    pub fn set_log_file(&self, path: impl AsRef<str>) -> Result<()> {
        let path = path.as_ref();
        if path.trim().is_empty() {
            return Err(LoggerError::invalid_path(path, "path must not be empty"));
        }
        let absolute = std::path::absolute(path)
            .map_err(|e| LoggerError::invalid_path(path, e.to_string()))?;
        self.inner.state.write().log_file = Some(absolute);
        Ok(())
    }

    /// Disable the file sink.
    pub fn clear_log_file(&self) {
        self.inner.state.write().log_file = None;
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.inner.state.read().log_file.clone()
    }

    /// Replace the minimum severity filter.
    pub fn set_min_level(&self, level: LogLevel) {
        self.inner.state.write().min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.inner.state.read().min_level
    }

    /// Set the strftime format used to render the prefix timestamp. The
    /// format is validated by a trial parse; unrecognized specifiers are
    /// rejected here rather than failing at write time.
    pub fn set_datetime_format(&self, format: impl AsRef<str>) -> Result<()> {
        let format = format.as_ref();
        if format.trim().is_empty() {
            return Err(LoggerError::invalid_format(
                format,
                "format must not be empty",
            ));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_format(
                format,
                "unrecognized specifier",
            ));
        }
        self.inner.state.write().datetime_format = format.to_string();
        Ok(())
    }

    pub fn datetime_format(&self) -> String {
        self.inner.state.read().datetime_format.clone()
    }

    pub fn set_color(&self, level: LogLevel, color: Color) {
        self.inner.state.write().colors.set(level, color);
    }

    pub fn color_for(&self, level: LogLevel) -> Color {
        self.inner.state.read().colors.get(level)
    }

    pub fn set_fallback_color(&self, color: Color) {
        self.inner.state.write().colors.set_fallback(color);
    }

    pub fn fallback_color(&self) -> Color {
        self.inner.state.read().colors.fallback()
    }

    /// Redirect console output into the given writer instead of the process
    /// stdout/stderr. Intended for tests that assert on console lines.
    pub fn set_console_writer(&self, writer: ConsoleWriter) {
        self.inner.state.write().console = Some(writer);
    }

    /// Restore console output to stdout/stderr.
    pub fn clear_console_writer(&self) {
        self.inner.state.write().console = None;
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        let state = self.inner.state.read();
        Snapshot {
            min_level: state.min_level,
            log_file: state.log_file.clone(),
            datetime_format: state.datetime_format.clone(),
            colors: state.colors,
            console: state.console.clone(),
        }
    }

    pub(crate) fn lock_write(&self) -> MutexGuard<'_, ()> {
        self.inner.write_lock.lock()
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new()
    }
}
