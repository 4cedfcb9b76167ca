use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{application::error::ApplicationError, domain::models::file::File};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// File as it arrives from the backend, after key normalisation.
#[derive(Debug, Default, Deserialize)]
pub struct FileDTO {
    pub name: Option<String>,
    pub extension: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub size: Option<u64>,
    pub path: Option<String>,
    #[serde(rename = "createdat")]
    pub created_at: Option<String>,
}

impl TryFrom<FileDTO> for File {
    type Error = ApplicationError;

    fn try_from(value: FileDTO) -> Result<Self, Self::Error> {
        let created_at = match value.created_at.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_timestamp(raw)?),
        };

        Ok(File {
            name: value.name.unwrap_or_default(),
            extension: value.extension.unwrap_or_default(),
            size: value.size.unwrap_or(0),
            path: value.path.unwrap_or_default(),
            created_at,
        })
    }
}

/// Accepts RFC 3339 or an offset-less date-time, the latter taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ApplicationError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ApplicationError::Decode(format!("invalid timestamp '{}'", raw)))
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid file size {}", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid file size '{}'", s))),
        Some(other) => Err(D::Error::custom(format!("invalid file size {}", other))),
    }
}
