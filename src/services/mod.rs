mod error;
mod json;
mod rest_api_client;

pub use error::ApiError;
pub use rest_api_client::RestApiClient;

use std::sync::Arc;

use crate::{
    application::services::FileStorageApi,
    domain::{config::client::ClientConfig, models::session::Session},
};

pub fn create_api_client(
    config: &ClientConfig,
    session: Arc<Session>,
) -> Result<Arc<dyn FileStorageApi>, ApiError> {
    let client = RestApiClient::new(config, session)?;
    Ok(Arc::new(client))
}
