pub mod route_finding_service;

pub use route_finding_service::*;
