use thiserror::Error;

#[derive(Debug, Error)]
pub enum KioskError {
    #[error("Engine unavailable: connectivity probe failed")]
    Unavailable,

    #[error("Engine request timed out")]
    Timeout,

    #[error("Engine transport error: {0}")]
    Transport(String),

    #[error("Engine returned no response")]
    NoResponse,

    #[error("Malformed engine response: {0}")]
    MalformedResponse(String),

    #[error("A previous request is still being processed")]
    LockContention,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, KioskError>;
