pub mod builtin;
pub mod graph;
pub mod loader;
pub mod ports;
pub mod types;
pub mod writer;

pub use builtin::*;
pub use graph::*;
pub use loader::*;
pub use ports::*;
pub use types::*;
pub use writer::*;
