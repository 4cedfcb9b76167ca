use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        dto::{
            search_dto::{SearchFilesRequest, SearchUsersRequest},
            summary_dto::UserSummary,
        },
        error::ApplicationError,
        services::FileStorageApi,
    },
    domain::models::{file::File, user::User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    /// Not an error: the query ran and matched nothing.
    Empty,
}

impl SearchOutcome {
    fn from_count(count: usize) -> Self {
        if count == 0 {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(count)
        }
    }
}

pub struct UserSearchViewModel {
    api: Arc<dyn FileStorageApi>,
    users: Vec<User>,
}

impl UserSearchViewModel {
    pub fn new(api: Arc<dyn FileStorageApi>) -> Self {
        Self {
            api,
            users: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub async fn search(&mut self, username: &str) -> Result<SearchOutcome, ApplicationError> {
        let request = SearchUsersRequest::new(username)?;
        let users = self.api.search_users(&request.username).await?;
        info!("User search '{}' matched {}", request.username, users.len());
        self.users = users;
        Ok(SearchOutcome::from_count(self.users.len()))
    }

    pub fn summary(&self, index: usize) -> Option<UserSummary> {
        self.users.get(index).map(UserSummary::from)
    }
}

pub struct FileSearchViewModel {
    api: Arc<dyn FileStorageApi>,
    files: Vec<File>,
}

impl FileSearchViewModel {
    pub fn new(api: Arc<dyn FileStorageApi>) -> Self {
        Self {
            api,
            files: Vec::new(),
        }
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub async fn search(&mut self, name: &str) -> Result<SearchOutcome, ApplicationError> {
        let request = SearchFilesRequest::new(name)?;
        let files = self.api.search_files(&request.name).await?;
        info!("File search '{}' matched {}", request.name, files.len());
        self.files = files;
        Ok(SearchOutcome::from_count(self.files.len()))
    }
}
