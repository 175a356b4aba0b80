//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, least to most severe.
///
/// Filtering writes a message iff its level is at least as severe as the
/// configured minimum, so `Critical` always logs and `Debug` only logs when
/// the minimum is `Debug`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Important = 4,
    Critical = 5,
}

impl LogLevel {
    /// All levels in severity order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Important,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Important => "Important",
            LogLevel::Critical => "Critical",
        }
    }

    /// Initial console color for this level before any reconfiguration.
    pub fn default_color(&self) -> colored::Color {
        use colored::Color::TrueColor;
        match self {
            LogLevel::Debug => TrueColor { r: 0x0f, g: 0x96, b: 0x0d },
            LogLevel::Info => TrueColor { r: 0xe5, g: 0xe5, b: 0xe5 },
            LogLevel::Warning => TrueColor { r: 0xc6, g: 0xad, b: 0x0b },
            LogLevel::Error => TrueColor { r: 0xd3, g: 0x0c, b: 0x0c },
            LogLevel::Important => TrueColor { r: 0x3e, g: 0xa6, b: 0xff },
            LogLevel::Critical => TrueColor { r: 0xff, g: 0x00, b: 0x00 },
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" | "INFORMATION" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "IMPORTANT" => Ok(LogLevel::Important),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
