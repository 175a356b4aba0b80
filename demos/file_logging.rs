//! File logging example

use duolog::prelude::*;

fn main() -> Result<()> {
    Logger::set_log_file("app.log")?;
    Logger::set_datetime_format("%Y-%m-%d %H:%M:%S")?;

    let logger = Logger::new("file-demo")?;

    for i in 0..5 {
        logger.info(format!("Processing batch {i}"));
    }
    logger.warning("One batch was empty");

    println!("Wrote log entries to app.log");
    Ok(())
}
