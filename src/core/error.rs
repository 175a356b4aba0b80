//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced by construction and configuration.
///
/// The per-message write path never returns these; file I/O failures there
/// are absorbed and reported as a console diagnostic instead.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Logger name empty or all-whitespace after sanitization
    #[error("Invalid logger name: {0}")]
    InvalidName(String),

    /// Log file path rejected at set-time
    #[error("Invalid log file path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    /// Datetime format string rejected at set-time
    #[error("Invalid datetime format '{format}': {message}")]
    InvalidFormat { format: String, message: String },

    /// IO error from the file sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid name error
    pub fn invalid_name(message: impl Into<String>) -> Self {
        LoggerError::InvalidName(message.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            format: format.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_name("empty after sanitization");
        assert!(matches!(err, LoggerError::InvalidName(_)));

        let err = LoggerError::invalid_path("", "path must not be empty");
        assert!(matches!(err, LoggerError::InvalidPath { .. }));

        let err = LoggerError::invalid_format("%Q", "unrecognized specifier");
        assert!(matches!(err, LoggerError::InvalidFormat { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_path("   ", "path must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid log file path '   ': path must not be empty"
        );

        let err = LoggerError::invalid_format("%Q", "unrecognized specifier");
        assert_eq!(
            err.to_string(),
            "Invalid datetime format '%Q': unrecognized specifier"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
