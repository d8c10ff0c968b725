//! Error types for the intrarank CLI

use thiserror::Error;

/// Result type alias for intrarank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the UID and SECRET in your credentials file.")]
    Unauthorized,

    #[error("Rate limit exceeded (HTTP 429). Response body: {0}")]
    RateLimited(String),

    #[error("HTTP {status} from {endpoint}. Response body: {body}")]
    HttpStatus {
        status: u16,
        endpoint: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("'access_token' not found in token response")]
    MissingToken,

    #[error("Expected a JSON array of cursus_users, but got something else")]
    NotAnArray,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not open credentials file: {0}. Run `intrarank init` to create one.")]
    NotFound(String),

    #[error("Could not find {0} in credentials file. Run `intrarank init` to set it.")]
    MissingKey(&'static str),

    #[error("Failed to save credentials: {0}")]
    SaveError(String),
}
