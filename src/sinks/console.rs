//! Console sink with per-level prefix coloring

use crate::core::config::ConsoleWriter;
use crate::core::log_level::LogLevel;
use colored::{Color, Colorize};
use std::io::Write;

/// Remove the ANSI escape character from untrusted message content so it
/// cannot smuggle terminal control sequences past the prefix. The prefix's
/// own color codes are system-generated and exempt.
pub(crate) fn strip_escapes(line: &str) -> String {
    line.replace('\x1b', "")
}

/// Write every line as `"<colored prefix> <line>"`, preceded by the file
/// sink diagnostic if one occurred. Error and above go to stderr, lower
/// levels to stdout, unless a writer override is installed. Console write
/// failures are ignored; this is the sink of last resort.
pub(crate) fn write_lines(
    target: &Option<ConsoleWriter>,
    level: LogLevel,
    prefix: &str,
    color: Color,
    lines: &[String],
    diagnostic: Option<&str>,
) {
    let painted = prefix.color(color).to_string();

    match target {
        Some(writer) => {
            let mut out = writer.lock();
            if let Some(message) = diagnostic {
                let _ = writeln!(out, "{message}");
            }
            for line in lines {
                let _ = writeln!(out, "{} {}", painted, strip_escapes(line));
            }
        }
        None => {
            if let Some(message) = diagnostic {
                eprintln!("{message}");
            }
            if level >= LogLevel::Error {
                let stderr = std::io::stderr();
                let mut out = stderr.lock();
                for line in lines {
                    let _ = writeln!(out, "{} {}", painted, strip_escapes(line));
                }
            } else {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                for line in lines {
                    let _ = writeln!(out, "{} {}", painted, strip_escapes(line));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_strip_escapes_removes_escape_byte() {
        assert_eq!(strip_escapes("a\x1b[31mb"), "a[31mb");
        assert_eq!(strip_escapes("plain"), "plain");
        assert_eq!(strip_escapes("\x1b\x1b"), "");
    }

    #[test]
    fn test_write_lines_to_override() {
        colored::control::set_override(false);
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let target: Option<ConsoleWriter> = Some(buffer.clone());

        write_lines(
            &target,
            LogLevel::Info,
            "[p]",
            Color::Red,
            &["one".to_string(), "two".to_string()],
            None,
        );

        let output = String::from_utf8(buffer.lock().clone()).expect("utf-8");
        assert_eq!(output, "[p] one\n[p] two\n");
    }

    #[test]
    fn test_diagnostic_precedes_lines() {
        colored::control::set_override(false);
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let target: Option<ConsoleWriter> = Some(buffer.clone());

        write_lines(
            &target,
            LogLevel::Warning,
            "[p]",
            Color::Yellow,
            &["body".to_string()],
            Some("Failed to write to log file: denied"),
        );

        let output = String::from_utf8(buffer.lock().clone()).expect("utf-8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Failed to write to log file: denied");
        assert_eq!(lines[1], "[p] body");
    }
}
