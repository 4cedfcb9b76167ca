use async_trait::async_trait;

use crate::{
    application::{dto::user_dto::UserUpdateDTO, error::ApplicationError},
    domain::models::{
        file::File,
        user::{User, UserDetail},
    },
};

/// Remote file-storage backend as seen by the administrator screens.
#[async_trait]
pub trait FileStorageApi: Send + Sync {
    async fn search_users(&self, username: &str) -> Result<Vec<User>, ApplicationError>;
    async fn search_files(&self, name: &str) -> Result<Vec<File>, ApplicationError>;
    async fn list_users(&self) -> Result<Vec<User>, ApplicationError>;
    async fn get_user_detail(&self, user_id: i64) -> Result<UserDetail, ApplicationError>;
    async fn update_user(
        &self,
        user_id: i64,
        update: &UserUpdateDTO,
    ) -> Result<(), ApplicationError>;
    async fn delete_user(&self, user_id: i64) -> Result<(), ApplicationError>;
}
