use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        dto::{summary_dto::FileSummary, user_dto::UserUpdateDTO},
        error::ApplicationError,
        services::FileStorageApi,
    },
    domain::models::{file::File, user::User},
};

/// Backing state of the detail screen for a single user.
///
/// Writes are never trusted locally: after a successful save the detail is
/// read back from the server and only that response is shown.
pub struct UserDetailViewModel {
    api: Arc<dyn FileStorageApi>,
    user_id: i64,
    user: User,
    files: Vec<File>,
}

impl UserDetailViewModel {
    pub fn new(api: Arc<dyn FileStorageApi>, user_id: i64) -> Self {
        Self {
            api,
            user_id,
            user: User::default(),
            files: Vec::new(),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn has_no_files(&self) -> bool {
        self.files.is_empty()
    }

    pub async fn load(&mut self) -> Result<(), ApplicationError> {
        let detail = self.api.get_user_detail(self.user_id).await?;
        info!(
            "Loaded user {} with {} files",
            self.user_id,
            detail.files.len()
        );
        self.user = detail.user;
        self.files = detail.files;
        Ok(())
    }

    /// Sends the form as a partial update, then reloads the canonical record.
    pub async fn save(&mut self, update: UserUpdateDTO) -> Result<(), ApplicationError> {
        self.api.update_user(self.user_id, &update).await?;
        info!("Updated user {}", self.user_id);
        self.load().await
    }

    /// Prefill for the edit form.
    pub fn edit_form(&self) -> UserUpdateDTO {
        UserUpdateDTO::from(&self.user)
    }

    pub fn file_summary(&self, index: usize) -> Option<FileSummary> {
        self.files.get(index).map(FileSummary::from)
    }
}
