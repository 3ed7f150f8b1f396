use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Map file not found: {path}")]
    MapFileNotFound { path: String },

    #[error("Malformed map file at line {line} (byte {offset}): {reason}")]
    MalformedMapFile {
        line: usize,
        offset: usize,
        reason: String,
    },

    #[error("Unknown location: {name}")]
    UnknownLocation { name: String },

    #[error("Stuck: no edge from {from} to {to}")]
    StuckOnStaleEdge { from: String, to: String },

    #[error("Unknown search strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("Unknown heuristic: {name}")]
    UnknownHeuristic { name: String },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigurationFormat(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
