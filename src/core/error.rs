use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these ends the program with a nonzero status.
#[derive(Error, Debug)]
pub enum WarError {
    #[error("Invalid number of territories: {given}. The minimum is {min}.")]
    InvalidTerritoryCount { given: String, min: usize },

    #[error("Could not allocate the territory map: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Input ended before setup was complete")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WarError>;
