use std::{env, time::Duration};

use thiserror::Error;

use crate::domain::models::{session::Session, user::User};

pub const DEFAULT_BASE_URL: &str = "http://course-project-4/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub timeout_secs: Option<u64>,
    pub admin_user_id: Option<i64>,
    pub admin_username: Option<String>,
}

impl ClientConfig {
    /// Reads the configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = get("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let token = get("API_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("API_TOKEN"))?;

        let timeout_secs = match get("API_TIMEOUT_SECS") {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid {
                    name: "API_TIMEOUT_SECS",
                    value,
                }
            })?),
            None => None,
        };

        let admin_user_id = match get("ADMIN_USER_ID") {
            Some(value) => Some(value.trim().parse::<i64>().map_err(|_| {
                ConfigError::Invalid {
                    name: "ADMIN_USER_ID",
                    value,
                }
            })?),
            None => None,
        };

        Ok(Self {
            base_url,
            token,
            timeout_secs,
            admin_user_id,
            admin_username: get("ADMIN_USERNAME").filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The signed-in administrator as handed over by the login flow.
    pub fn session(&self) -> Session {
        let user = User {
            id: self.admin_user_id.unwrap_or_default(),
            username: self.admin_username.clone().unwrap_or_default(),
            ..User::default()
        };
        Session::new(user, self.token.clone())
    }
}
