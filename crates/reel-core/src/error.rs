//! Error types for Reel Core

use thiserror::Error;

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Player error types
#[derive(Error, Debug)]
pub enum Error {
    // Config endpoint errors
    #[error("Config endpoint returned HTTP {status} for {url}")]
    ConfigStatus { url: String, status: u16 },

    #[error("Failed to parse player config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Default CDN '{cdn}' not listed in player config")]
    MissingCdn { cdn: String },

    #[error("Invalid stream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // Surface errors
    #[error("Playback surface error: {0}")]
    Surface(String),

    // Network errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a surface error
    pub fn surface(msg: impl Into<String>) -> Self {
        Error::Surface(msg.into())
    }

    /// Returns true if a later attempt could succeed.
    ///
    /// The player never retries on its own; this is informational for callers.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::ConfigStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns the error code used in log fields
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ConfigStatus { .. } => "CONFIG_STATUS",
            Error::ConfigParse(_) => "CONFIG_PARSE",
            Error::MissingCdn { .. } => "MISSING_CDN",
            Error::InvalidUrl(_) => "INVALID_URL",
            Error::Surface(_) => "SURFACE",
            Error::Network(_) => "NETWORK",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Io(_) => "IO",
        }
    }
}
