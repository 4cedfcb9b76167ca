use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::{
    application::{
        dto::{
            search_dto::{SearchFilesRequest, SearchUsersRequest},
            user_dto::UserUpdateDTO,
        },
        error::ApplicationError,
        services::{Confirmer, FileStorageApi},
    },
    domain::models::{
        file::File,
        user::{User, UserDetail},
    },
};

/// In-memory backend that records every call it receives.
#[derive(Default)]
pub struct FakeApi {
    users: Mutex<Vec<User>>,
    files: Mutex<HashMap<i64, Vec<File>>>,
    failures: Mutex<HashMap<&'static str, ApplicationError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_users(users: Vec<User>) -> Arc<Self> {
        let api = Self::default();
        *api.users.lock().unwrap() = users;
        Arc::new(api)
    }

    pub fn set_files(&self, user_id: i64, files: Vec<File>) {
        self.files.lock().unwrap().insert(user_id, files);
    }

    /// The next call to `operation` fails with `error`.
    pub fn fail_next(&self, operation: &'static str, error: ApplicationError) {
        self.failures.lock().unwrap().insert(operation, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn backend_users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str, call: String) -> Result<(), ApplicationError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().remove(operation) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub fn not_found() -> ApplicationError {
    ApplicationError::Http {
        status: 404,
        body: r#"{"message":"Not found"}"#.to_string(),
    }
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        ..User::default()
    }
}

#[async_trait]
impl FileStorageApi for FakeApi {
    async fn search_users(&self, username: &str) -> Result<Vec<User>, ApplicationError> {
        let request = SearchUsersRequest::new(username)?;
        self.enter("search_users", format!("search_users:{}", request.username))?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.username.contains(&request.username))
            .cloned()
            .collect())
    }

    async fn search_files(&self, name: &str) -> Result<Vec<File>, ApplicationError> {
        let request = SearchFilesRequest::new(name)?;
        self.enter("search_files", format!("search_files:{}", request.name))?;
        Ok(self
            .files
            .lock()
            .unwrap()
            .values()
            .flatten()
            .filter(|f| f.name.contains(&request.name))
            .cloned()
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<User>, ApplicationError> {
        self.enter("list_users", "list_users".to_string())?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user_detail(&self, user_id: i64) -> Result<UserDetail, ApplicationError> {
        self.enter("get_user_detail", format!("get_user_detail:{}", user_id))?;
        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(not_found)?;
        let files = self
            .files
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        Ok(UserDetail { user, files })
    }

    async fn update_user(
        &self,
        user_id: i64,
        update: &UserUpdateDTO,
    ) -> Result<(), ApplicationError> {
        self.enter("update_user", format!("update_user:{}", user_id))?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(not_found)?;
        user.surname = update.surname.clone();
        user.name = update.name.clone();
        user.username = update.username.clone();
        user.email = update.email.clone();
        user.phone = update.phone.clone();
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), ApplicationError> {
        self.enter("delete_user", format!("delete_user:{}", user_id))?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

/// Answers every prompt with a fixed reply.
pub struct FixedConfirmer(pub bool);

#[async_trait]
impl Confirmer for FixedConfirmer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
