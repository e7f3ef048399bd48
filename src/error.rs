use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown phoneme: {0}")]
    UnknownPhoneme(String),

    #[error("Unknown gradient direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
