//! Domain entities: core data structures

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single contact record.
///
/// Descriptive fields are stored verbatim: no trimming, no format checks,
/// empty strings allowed. Records written without one of them decode with
/// an empty string in its place; `id` is always required.
///
/// Scalars that are not strings (`"phone": 5550100`) decode to their text
/// form, and keys this type does not know are kept in `extra` so a rewrite
/// of the store carries them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-generated identifier (UUID v4, hyphenated)
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    /// Fields written by other tools, preserved on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contact {
    /// Create a contact with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            extra: Map::new(),
        }
    }

    /// Exact, case-sensitive id comparison.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}

/// Accept any JSON value for a text field.
///
/// `null` becomes empty, numbers and booleans their literal text, arrays and
/// objects their compact JSON.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
