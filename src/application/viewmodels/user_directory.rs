use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        error::ApplicationError,
        services::{Confirmer, FileStorageApi},
        viewmodels::user_detail::UserDetailViewModel,
    },
    domain::models::user::User,
};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Backing state of the directory screen: every user, one row each.
pub struct UserDirectoryViewModel {
    api: Arc<dyn FileStorageApi>,
    users: Vec<User>,
}

impl UserDirectoryViewModel {
    pub fn new(api: Arc<dyn FileStorageApi>) -> Self {
        Self {
            api,
            users: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Replaces the list with what the server returns. On failure the
    /// previous list stays as it was.
    pub async fn refresh(&mut self) -> Result<usize, ApplicationError> {
        let users = self.api.list_users().await?;
        info!("Loaded {} users", users.len());
        self.users = users;
        Ok(self.users.len())
    }

    /// Deletes a user once the administrator confirms, then drops the row
    /// locally without re-fetching the list.
    pub async fn delete(
        &mut self,
        user_id: i64,
        confirmer: &dyn Confirmer,
    ) -> Result<DeleteOutcome, ApplicationError> {
        if !confirmer.confirm(DELETE_PROMPT).await {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.api.delete_user(user_id).await?;
        info!("Deleted user {}", user_id);

        if let Some(index) = self.users.iter().position(|u| u.id == user_id) {
            self.users.remove(index);
        }
        Ok(DeleteOutcome::Deleted)
    }

    /// Detail screen for one row, sharing this screen's API client.
    pub fn open(&self, user_id: i64) -> UserDetailViewModel {
        UserDetailViewModel::new(self.api.clone(), user_id)
    }
}
