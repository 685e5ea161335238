use thiserror::Error;

/// Errors raised by keyboard navigation and settings handling
#[derive(Error, Debug)]
pub enum KeyNavError {
    #[error("navigation handler '{0}' received a key while inactive")]
    Inactive(&'static str),

    #[error("navigation handler '{0}' is not available for the current chart state")]
    Unavailable(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, KeyNavError>;
