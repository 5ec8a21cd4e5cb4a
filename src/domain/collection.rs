//! Codec for the persisted contact collection
//!
//! The backing store is a single JSON array of contact objects.

use crate::domain::{Contact, DomainError};

/// Serialized form of an empty collection.
pub const EMPTY_COLLECTION: &str = "[]";

/// Parse store content into an ordered list of contacts.
///
/// Empty or whitespace-only content is an empty collection, not an error.
pub fn parse_collection(content: &str) -> Result<Vec<Contact>, DomainError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content).map_err(|e| DomainError::MalformedCollection {
        message: e.to_string(),
    })
}

/// Serialize contacts as pretty JSON with two-space indentation.
pub fn serialize_collection(contacts: &[Contact]) -> Result<String, DomainError> {
    serde_json::to_string_pretty(contacts).map_err(|e| DomainError::Serialize {
        message: e.to_string(),
    })
}
