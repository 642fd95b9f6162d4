//! Decoded secret payloads.

use super::types::SecretString;
use crate::errors::{Result, SecretAccessError};
use serde::Serialize;
use std::collections::BTreeMap;

/// A secret decoded from the JSON object stored in the secrets store.
///
/// Keys are kept in sorted order so two secrets built from the same payload
/// compare and print identically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Secret {
    entries: BTreeMap<String, SecretString>,
}

impl Secret {
    /// Parse a secret payload.
    ///
    /// The payload must be a JSON object. String members are stored as is and
    /// any other member is stored as its compact JSON text.
    pub fn from_json(secret_id: &str, payload: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(payload).map_err(|e| {
            SecretAccessError::invalid_payload(
                secret_id,
                format!("payload is not valid JSON: {}", e),
            )
        })?;

        let serde_json::Value::Object(object) = value else {
            return Err(SecretAccessError::invalid_payload(
                secret_id,
                format!("payload must be a JSON object, found {}", json_kind(&value)),
            ));
        };

        let entries = object
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, SecretString::new(text))
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&SecretString> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretString)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Secret
where
    K: Into<String>,
    V: Into<SecretString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
