use crate::domain::models::file::File;

#[derive(Debug, Clone, Default)]
pub struct User {
    pub id: i64,
    pub surname: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

/// Users are the same entry when their server-assigned ids match.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

/// A user together with the files the detail endpoint returned for them.
#[derive(Debug, Clone, Default)]
pub struct UserDetail {
    pub user: User,
    pub files: Vec<File>,
}
