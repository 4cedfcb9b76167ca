use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ApiError> for ApplicationError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Status { status, body } => ApplicationError::Http { status, body },
            ApiError::InvalidResponse(msg) => ApplicationError::Decode(msg),
            other => ApplicationError::Network(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_connect() {
            ApiError::ConnectionFailed(error.to_string())
        } else if error.is_decode() {
            ApiError::InvalidResponse(error.to_string())
        } else if error.is_builder() {
            ApiError::InternalError(error.to_string())
        } else {
            ApiError::NetworkError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InvalidResponse(error.to_string())
    }
}
