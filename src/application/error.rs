use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Required input was missing; no request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("Server responded with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApplicationError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApplicationError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
