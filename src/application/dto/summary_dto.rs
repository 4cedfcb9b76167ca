use std::fmt;

use crate::domain::models::{file::File, user::User};

pub const NOT_SPECIFIED: &str = "not specified";

/// Read-only card shown when a file is picked on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub extension: String,
    pub size: u64,
    pub path: String,
    pub created_at: String,
}

impl From<&File> for FileSummary {
    fn from(file: &File) -> Self {
        Self {
            name: file.name.clone(),
            extension: file.extension.clone(),
            size: file.size,
            path: file.path.clone(),
            created_at: file
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        }
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Extension: {}", self.extension)?;
        writeln!(f, "Size: {}", self.size)?;
        writeln!(f, "Path: {}", self.path)?;
        write!(f, "Created: {}", self.created_at)
    }
}

/// Read-only card shown when a user is picked from search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub surname: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            surname: user.surname.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

impl fmt::Display for UserSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Username: {}", self.username)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Phone: {}", self.phone)
    }
}
