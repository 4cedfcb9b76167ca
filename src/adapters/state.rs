use std::sync::Arc;

use crate::{application::services::FileStorageApi, domain::models::session::Session};

/// Shared by every screen: the read-only session and the API client built from it.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub api: Arc<dyn FileStorageApi>,
}
