use serde::{Deserialize, Serialize};

use crate::application::{
    dto::{file_dto::FileDTO, user_dto::UserDTO},
    error::ApplicationError,
};

pub const EMPTY_USERNAME_MESSAGE: &str = "Enter a username.";
pub const EMPTY_FILE_NAME_MESSAGE: &str = "Enter a file name.";

#[derive(Debug, Clone, Serialize)]
pub struct SearchUsersRequest {
    pub username: String,
}

impl SearchUsersRequest {
    /// Rejects blank input before anything reaches the network.
    pub fn new(username: &str) -> Result<Self, ApplicationError> {
        Ok(Self {
            username: require(username, EMPTY_USERNAME_MESSAGE)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchFilesRequest {
    pub name: String,
}

impl SearchFilesRequest {
    pub fn new(name: &str) -> Result<Self, ApplicationError> {
        Ok(Self {
            name: require(name, EMPTY_FILE_NAME_MESSAGE)?,
        })
    }
}

/// `{users: [...]}`; a missing or null key means no matches.
#[derive(Debug, Default, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Option<Vec<UserDTO>>,
}

/// `{files: [...]}`; a missing or null key means no matches.
#[derive(Debug, Default, Deserialize)]
pub struct FilesEnvelope {
    #[serde(default)]
    pub files: Option<Vec<FileDTO>>,
}

fn require(input: &str, message: &str) -> Result<String, ApplicationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}
