use std::sync::Arc;

use crate::domain::models::{session::Session, user::User};

pub struct HomeViewModel {
    session: Arc<Session>,
}

impl HomeViewModel {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub fn current_user(&self) -> &User {
        self.session.user()
    }

    pub fn greeting(&self) -> String {
        let user = self.session.user();
        if user.username.is_empty() {
            "Signed in as administrator".to_string()
        } else {
            format!("Signed in as {}", user.username)
        }
    }
}
