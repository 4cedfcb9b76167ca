use std::fmt;

use crate::domain::models::user::User;

/// The administrator signed in for the lifetime of the process.
///
/// Built once from the login flow's output and shared read-only
/// (usually behind an `Arc`) by the API client and the home screen.
#[derive(Clone)]
pub struct Session {
    user: User,
    token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
