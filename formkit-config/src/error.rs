// Configuration errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("Unsupported configuration format for {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Cannot store value for {key}: {message}")]
    SerializationError { key: String, message: String },

    #[error("Invalid value for {key}: {message}")]
    DeserializationError { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
