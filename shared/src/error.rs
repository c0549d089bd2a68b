use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl SharedError {
    /// Maps a non-success HTTP status and its error message onto a variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("Mapping HTTP {} to error: {}", status, message);
        match status {
            400 | 422 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Internal(message),
        }
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
