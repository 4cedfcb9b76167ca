pub mod file_dto;
pub mod search_dto;
pub mod summary_dto;
pub mod user_dto;
