use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Forwards every message to each of its sinks in order.
pub struct MultiLogger {
    sinks: Vec<DynLogger>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.error(msg));
    }
}

/// File plus console when the file backend can be installed, console only
/// otherwise.
pub fn init_combined_logger(path: &str, level: &str) -> DynLogger {
    let console = super::init_console_logger();
    match super::init_file_logger(path, level) {
        Ok(file) => Arc::new(MultiLogger::new(vec![file, console])),
        Err(reason) => {
            console.warn(&format!("file logging disabled: {}", reason));
            console
        }
    }
}
