pub mod agent;
pub mod environment;
pub mod events;
pub mod scenario;

pub use agent::*;
pub use environment::*;
pub use events::*;
pub use scenario::*;
