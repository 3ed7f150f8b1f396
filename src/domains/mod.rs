pub mod logger;
pub mod route_agent;
pub mod route_map;
pub mod search;

pub use logger::*;
pub use route_agent::*;
pub use route_map::*;
pub use search::*;
