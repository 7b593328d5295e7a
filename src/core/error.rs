use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid elapsed simulation time: {0} (must be positive and finite)")]
    InvalidElapsed(f64),

    #[error("Unknown speed mode: {0} (expected 1-8)")]
    UnknownSpeedMode(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid simulation state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
