use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

struct ConsoleBridge;

impl DomainLogger for ConsoleBridge {
    fn info(&self, msg: &str) {
        println!("[route-finder] {}", msg);
    }

    fn warn(&self, msg: &str) {
        println!("[route-finder] WARN: {}", msg);
    }

    fn error(&self, msg: &str) {
        eprintln!("[route-finder] ERROR: {}", msg);
    }
}

/// Console-backed logger; also the fallback when the file logger is unavailable.
pub fn init_console_logger() -> DynLogger {
    Arc::new(ConsoleBridge)
}
