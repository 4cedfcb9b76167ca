pub mod dto;
pub mod error;
pub mod services;
pub mod viewmodels;
