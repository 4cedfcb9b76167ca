use std::fmt;

use tracing::{error, warn};

use crate::application::error::ApplicationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// The single message an action leaves for the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<ApplicationError> for Notice {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => {
                warn!("Rejected input: {}", msg);
                Notice::error(msg)
            }
            ApplicationError::Network(msg) => {
                error!("Network failure: {}", msg);
                Notice::error(format!("An error occurred: {}", msg))
            }
            ApplicationError::Http { status, body } => {
                if status >= 500 {
                    error!("Server error {}: {}", status, body);
                } else {
                    warn!("Request rejected with {}: {}", status, body);
                }
                if body.trim().is_empty() {
                    Notice::error(format!("Request failed. Code: {}", status))
                } else {
                    Notice::error(format!(
                        "Request failed. Code: {}, Response: {}",
                        status, body
                    ))
                }
            }
            ApplicationError::Decode(msg) => {
                error!("Could not read response: {}", msg);
                Notice::error(format!("Unexpected response from server: {}", msg))
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            NoticeKind::Info => "i",
            NoticeKind::Success => "+",
            NoticeKind::Error => "!",
        };
        write!(f, "[{}] {}: {}", tag, self.title, self.message)
    }
}
