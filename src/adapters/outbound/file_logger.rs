use crate::domains::logger::{DynLogger, FileLogger};
use log::LevelFilter;
use std::sync::Arc;

/// Install the `fast_log` file backend at `level` and return a logger that
/// writes to it.
pub fn init_file_logger(path: &str, level: &str) -> Result<DynLogger, String> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| format!("Unknown log level: {}", level))?;
    FileLogger::init(path, level).map_err(|e| format!("Failed to initialize fast_log: {}", e))?;
    Ok(Arc::new(FileLogger))
}
