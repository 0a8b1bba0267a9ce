use serde::{Deserialize, Deserializer, Serialize};

use super::ids::ContactId;

/// A single phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
        }
    }

    /// Case-insensitive name comparison used for uniqueness.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Create payload. Fields that are absent, `null` or not strings
/// deserialize to `None` and are rejected later by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContact {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub number: Option<String>,
}

impl NewContact {
    /// Parses a raw request body; anything unparseable is an empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
