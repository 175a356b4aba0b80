//! Append-only file sink

use crate::core::error::Result;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append one `"<prefix> <line>"` record per output line, newline
/// terminated. The file is opened in append mode on every call and created
/// on first use; there is no coordination with other processes appending to
/// the same path.
pub(crate) fn append_lines(path: &Path, prefix: &str, lines: &[String]) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{prefix} {line}")?;
    }
    writer.flush()?;
    Ok(())
}
