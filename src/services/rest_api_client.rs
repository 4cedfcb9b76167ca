use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    application::{
        dto::{
            file_dto::FileDTO,
            search_dto::{FilesEnvelope, SearchFilesRequest, SearchUsersRequest, UsersEnvelope},
            user_dto::{UserDTO, UserUpdateDTO},
        },
        error::ApplicationError,
        services::FileStorageApi,
    },
    domain::{
        config::client::ClientConfig,
        models::{
            file::File,
            session::Session,
            user::{User, UserDetail},
        },
    },
    services::{error::ApiError, json},
};

#[derive(Debug, Deserialize)]
struct UserDetailResponse {
    #[serde(default)]
    user: Option<UserDTO>,
    #[serde(default)]
    files: Option<Vec<FileDTO>>,
}

/// `FileStorageApi` over the backend's REST endpoints.
pub struct RestApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl RestApiClient {
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::InternalError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        self.client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.session.token()))
            .header(ACCEPT, "application/json")
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await;

        read_body(status, body)
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        json::decode(&body)
    }
}

/// A failure status wins over a body that could not be read, so the code
/// always reaches the caller.
fn read_body<E: std::fmt::Display>(
    status: StatusCode,
    body: Result<String, E>,
) -> Result<String, ApiError> {
    if !status.is_success() {
        debug!("Request failed with status {}", status);
        let body = body.unwrap_or_else(|e| {
            debug!("Could not read error body: {}", e);
            String::new()
        });
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    body.map_err(|e| ApiError::NetworkError(e.to_string()))
}

fn into_users(items: Option<Vec<UserDTO>>) -> Vec<User> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(User::from)
        .collect()
}

fn into_files(items: Option<Vec<FileDTO>>) -> Result<Vec<File>, ApplicationError> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(File::try_from)
        .collect()
}

#[async_trait]
impl FileStorageApi for RestApiClient {
    async fn search_users(&self, username: &str) -> Result<Vec<User>, ApplicationError> {
        let body = SearchUsersRequest::new(username)?;

        let envelope: Option<UsersEnvelope> = self
            .fetch(self.request(Method::POST, "/search/user").json(&body))
            .await?;

        Ok(into_users(envelope.and_then(|e| e.users)))
    }

    async fn search_files(&self, name: &str) -> Result<Vec<File>, ApplicationError> {
        let body = SearchFilesRequest::new(name)?;

        let envelope: Option<FilesEnvelope> = self
            .fetch(self.request(Method::POST, "/search/file").json(&body))
            .await?;

        into_files(envelope.and_then(|e| e.files))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApplicationError> {
        let users: Option<Vec<UserDTO>> = self.fetch(self.request(Method::GET, "/users")).await?;
        Ok(into_users(users))
    }

    async fn get_user_detail(&self, user_id: i64) -> Result<UserDetail, ApplicationError> {
        let path = format!("/users/{}", user_id);
        let detail: UserDetailResponse = self.fetch(self.request(Method::GET, &path)).await?;

        let user = detail
            .user
            .map(User::from)
            .ok_or_else(|| ApplicationError::Decode("response has no 'user'".to_string()))?;

        Ok(UserDetail {
            user,
            files: into_files(detail.files)?,
        })
    }

    async fn update_user(
        &self,
        user_id: i64,
        update: &UserUpdateDTO,
    ) -> Result<(), ApplicationError> {
        let path = format!("/users/{}", user_id);
        self.execute(self.request(Method::PATCH, &path).json(update))
            .await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), ApplicationError> {
        let path = format!("/users/{}", user_id);
        self.execute(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
