//! Output sinks for the write path

pub(crate) mod console;
pub(crate) mod file;
