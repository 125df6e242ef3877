use thiserror::Error;

/// Errors surfaced by the container and the file helpers.
///
/// Parsing itself has no failure outcome; malformed lines simply produce no entry.
#[derive(Error, Debug)]
pub enum IniError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("File does not exist: {0}")]
    NotExist(String),

    #[error("Cannot be written as INI text: {0}")]
    Unrepresentable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IniError>;
