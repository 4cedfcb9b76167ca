pub mod home;
pub mod search;
pub mod user_detail;
pub mod user_directory;

#[cfg(test)]
pub(crate) mod fake_api;
