use serde::{Deserialize, Serialize};

use crate::domain::models::user::User;

/// User as it arrives from the backend, after key normalisation.
///
/// Every field is optional; absent or `null` strings become empty.
#[derive(Debug, Default, Deserialize)]
pub struct UserDTO {
    pub id: Option<i64>,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<UserDTO> for User {
    fn from(value: UserDTO) -> Self {
        User {
            id: value.id.unwrap_or(0),
            surname: value.surname.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            username: value.username.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            phone: value.phone.unwrap_or_default(),
        }
    }
}

/// PATCH body for `/users/{id}`: the edit form as it currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdateDTO {
    pub surname: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl UserUpdateDTO {
    /// Sets one form field by name. Returns `false` for unknown fields.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field.trim().to_ascii_lowercase().as_str() {
            "surname" => &mut self.surname,
            "name" => &mut self.name,
            "username" => &mut self.username,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn matches(&self, user: &User) -> bool {
        self == &UserUpdateDTO::from(user)
    }
}

impl From<&User> for UserUpdateDTO {
    fn from(user: &User) -> Self {
        Self {
            surname: user.surname.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}
