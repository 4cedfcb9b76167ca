mod api_service;
mod confirmer;

pub use api_service::FileStorageApi;
pub use confirmer::Confirmer;
