use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::services::error::ApiError;

/// Lowercases object keys and drops `_`/`-`, so `CreatedAt`, `createdAt`
/// and `created_at` all become `createdat`.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (normalize_key(&k), normalize_keys(v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Parses a response body with case-insensitive field names.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(normalize_keys(value))?)
}
