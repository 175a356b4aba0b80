//! Basic usage example

use duolog::prelude::*;

fn main() -> Result<()> {
    Logger::set_log_level(LogLevel::Debug);

    let logger = Logger::new("example")?;

    logger.debug("Starting up");
    logger.info("Application ready");
    logger.warning("Disk space below 10%");
    logger.error("Failed to reach upstream");
    logger.important("Maintenance window begins at 02:00");
    logger.critical("Shutting down");

    // Multi-line messages share one prefix per line
    logger.info("first line\nsecond line");

    // Values log via their Display impl
    logger.info_value(&42);

    // Errors append their cause chain
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    logger.error_with("Upstream request failed", &err);

    Ok(())
}
