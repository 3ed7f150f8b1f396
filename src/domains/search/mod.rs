mod engine;
mod iterative;
mod rbfs;

pub mod heuristic;
pub mod plan;
pub mod strategy;

pub use heuristic::*;
pub use plan::*;
pub use strategy::*;
