//! Named logger and the dual-sink write path

use crate::core::config::ConfigHandle;
use crate::core::error::{LoggerError, Result};
use crate::core::log_level::LogLevel;
use crate::sinks::{console, file};
use chrono::Local;
use colored::Color;
use std::error::Error as StdError;
use std::fmt;

/// A named logger writing leveled, timestamped messages to the console and
/// optionally to an append-only file.
///
/// The display name is immutable after construction. All other behavior
/// comes from the attached [`ConfigHandle`]; loggers sharing a handle share
/// its settings and its write lock, so their multi-line writes never
/// interleave in either sink.
#[derive(Clone)]
pub struct Logger {
    name: String,
    config: ConfigHandle,
}

impl Logger {
    /// Create a logger on the process-wide configuration. The name has
    /// control characters (U+0000..=U+001F and U+007F) stripped; fails if
    /// nothing printable remains.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        Self::with_config(name, ConfigHandle::global())
    }

    /// Create a logger on an explicit configuration handle. Tests use this
    /// to keep their settings and output isolated from other tests.
    pub fn with_config(name: impl AsRef<str>, config: ConfigHandle) -> Result<Self> {
        let name = sanitize_name(name.as_ref())?;
        Ok(Self { name, config })
    }

    /// Create a logger named after `T`'s fully-qualified type name, on the
    /// process-wide configuration. Type names are always printable, so this
    /// cannot fail.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            config: ConfigHandle::global(),
        }
    }

    /// The sanitized display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration this logger writes under.
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Set the process-wide log file target. See
    /// [`ConfigHandle::set_log_file`].
    pub fn set_log_file(path: impl AsRef<str>) -> Result<()> {
        ConfigHandle::global().set_log_file(path)
    }

    /// Set the process-wide minimum severity. The default is
    /// [`LogLevel::Info`].
    pub fn set_log_level(level: LogLevel) {
        ConfigHandle::global().set_min_level(level);
    }

    /// Set the process-wide datetime format. See
    /// [`ConfigHandle::set_datetime_format`].
    pub fn set_datetime_format(format: impl AsRef<str>) -> Result<()> {
        ConfigHandle::global().set_datetime_format(format)
    }

    /// Set the process-wide console color for one level.
    pub fn set_level_color(level: LogLevel, color: Color) {
        ConfigHandle::global().set_color(level, color);
    }

    pub fn level_color(level: LogLevel) -> Color {
        ConfigHandle::global().color_for(level)
    }

    /// Set the process-wide color used when no level-specific color applies.
    pub fn set_fallback_color(color: Color) {
        ConfigHandle::global().set_fallback_color(color);
    }

    pub fn fallback_color() -> Color {
        ConfigHandle::global().fallback_color()
    }

    /// Write a message at the given level. Never fails: messages below the
    /// minimum level are dropped, and file sink failures are downgraded to a
    /// console diagnostic.
    pub fn write(&self, message: impl AsRef<str>, level: LogLevel) {
        self.write_entry(level, message.as_ref(), None);
    }

    /// Write a message with an attached error. The error's `Display` plus
    /// its full `source()` chain is appended after the message lines.
    pub fn write_with_error(
        &self,
        message: impl AsRef<str>,
        level: LogLevel,
        error: &(dyn StdError + 'static),
    ) {
        self.write_entry(level, message.as_ref(), Some(error));
    }

    /// Write a single value rendered via its `Display` implementation.
    pub fn write_value<T: fmt::Display + ?Sized>(&self, value: &T, level: LogLevel) {
        self.write_entry(level, &value.to_string(), None);
    }

    fn write_entry(
        &self,
        level: LogLevel,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) {
        let settings = self.config.snapshot();
        if level < settings.min_level {
            return;
        }

        let mut lines: Vec<String> = Vec::new();
        let trimmed = message.trim();
        if trimmed.is_empty() {
            if error.is_none() {
                // No message, no error
                lines.push("null".to_string());
            }
        } else {
            lines.extend(
                trimmed
                    .split('\n')
                    .map(|line| line.trim_end_matches('\r').to_string()),
            );
        }
        if let Some(err) = error {
            let rendered = render_error_chain(err);
            lines.extend(rendered.split('\n').map(str::to_string));
        }

        // One prefix per call, reused for every line in both sinks.
        let timestamp = Local::now().format(&settings.datetime_format).to_string();
        let prefix = format!("[{}] [{}] [{}]", timestamp, self.name, level);

        let _guard = self.config.lock_write();

        // File first: best-effort, and its failure diagnostic has to land on
        // the console ahead of this call's own lines.
        let mut diagnostic = None;
        if let Some(path) = &settings.log_file {
            if let Err(e) = file::append_lines(path, &prefix, &lines) {
                diagnostic = Some(format!("Failed to write to log file: {e}"));
            }
        }

        console::write_lines(
            &settings.console,
            level,
            &prefix,
            settings.colors.get(level),
            &lines,
            diagnostic.as_deref(),
        );
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.write(message, LogLevel::Debug);
    }

    #[inline]
    pub fn debug_with(&self, message: impl AsRef<str>, error: &(dyn StdError + 'static)) {
        self.write_with_error(message, LogLevel::Debug, error);
    }

    #[inline]
    pub fn debug_value<T: fmt::Display + ?Sized>(&self, value: &T) {
        self.write_value(value, LogLevel::Debug);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.write(message, LogLevel::Info);
    }

    #[inline]
    pub fn info_with(&self, message: impl AsRef<str>, error: &(dyn StdError + 'static)) {
        self.write_with_error(message, LogLevel::Info, error);
    }

    #[inline]
    pub fn info_value<T: fmt::Display + ?Sized>(&self, value: &T) {
        self.write_value(value, LogLevel::Info);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.write(message, LogLevel::Warning);
    }

    #[inline]
    pub fn warning_with(&self, message: impl AsRef<str>, error: &(dyn StdError + 'static)) {
        self.write_with_error(message, LogLevel::Warning, error);
    }

    #[inline]
    pub fn warning_value<T: fmt::Display + ?Sized>(&self, value: &T) {
        self.write_value(value, LogLevel::Warning);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.write(message, LogLevel::Error);
    }

    #[inline]
    pub fn error_with(&self, message: impl AsRef<str>, error: &(dyn StdError + 'static)) {
        self.write_with_error(message, LogLevel::Error, error);
    }

    #[inline]
    pub fn error_value<T: fmt::Display + ?Sized>(&self, value: &T) {
        self.write_value(value, LogLevel::Error);
    }

    #[inline]
    pub fn important(&self, message: impl AsRef<str>) {
        self.write(message, LogLevel::Important);
    }

    #[inline]
    pub fn important_with(&self, message: impl AsRef<str>, error: &(dyn StdError + 'static)) {
        self.write_with_error(message, LogLevel::Important, error);
    }

    #[inline]
    pub fn important_value<T: fmt::Display + ?Sized>(&self, value: &T) {
        self.write_value(value, LogLevel::Important);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.write(message, LogLevel::Critical);
    }

    #[inline]
    pub fn critical_with(&self, message: impl AsRef<str>, error: &(dyn StdError + 'static)) {
        self.write_with_error(message, LogLevel::Critical, error);
    }

    #[inline]
    pub fn critical_value<T: fmt::Display + ?Sized>(&self, value: &T) {
        self.write_value(value, LogLevel::Critical);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

/// Strip control characters (U+0000..=U+001F, U+007F) from a candidate name.
fn sanitize_name(raw: &str) -> Result<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '\0'..='\x1f' | '\x7f'))
        .collect();
    if cleaned.trim().is_empty() {
        return Err(LoggerError::invalid_name(
            "name is empty after removing control characters",
        ));
    }
    Ok(cleaned)
}

/// Render an error followed by its full cause chain, one cause per line.
fn render_error_chain(err: &(dyn StdError + 'static)) -> String {
    use std::fmt::Write as _;
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "\nCaused by: {cause}");
        source = cause.source();
    }
    rendered
}
