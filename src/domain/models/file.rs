use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    pub name: String,
    pub extension: String,
    pub size: u64,
    pub path: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl File {
    /// `name.extension`, or just the name when the extension is empty.
    pub fn display_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension.trim_start_matches('.'))
        }
    }
}
