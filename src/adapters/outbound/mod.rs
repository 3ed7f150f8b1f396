pub mod console_logger;
pub mod file_logger;
pub mod map_source;
pub mod multi_logger;
pub mod noop_logger;

pub use console_logger::*;
pub use file_logger::*;
pub use map_source::*;
pub use multi_logger::*;
pub use noop_logger::*;
