//! Shared response envelope types for API handlers.
//!
//! Mutations return `{ "message": ..., "<entity>": ... }` and reads return
//! `{ "<entity>": ... }`. Use [`Envelope`] instead of ad-hoc
//! `serde_json::json!` so the payload stays typed.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Success envelope wrapping an entity under a named key, with an optional
/// human-readable message.
#[derive(Debug)]
pub struct Envelope<T: Serialize> {
    message: Option<&'static str>,
    key: &'static str,
    entity: T,
}

impl<T: Serialize> Envelope<T> {
    /// `{ "<key>": entity }` — the read shape.
    pub fn new(key: &'static str, entity: T) -> Self {
        Self {
            message: None,
            key,
            entity,
        }
    }

    /// `{ "message": ..., "<key>": entity }` — the mutation shape.
    pub fn with_message(message: &'static str, key: &'static str, entity: T) -> Self {
        Self {
            message: Some(message),
            key,
            entity,
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.message.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(message) = self.message {
            map.serialize_entry("message", message)?;
        }
        map.serialize_entry(self.key, &self.entity)?;
        map.end()
    }
}

/// Bare `{ "message": ... }` body for deletes and other entity-less successes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_shape() {
        let body = serde_json::to_value(Envelope::new("persons", vec![1, 2])).unwrap();
        assert_eq!(body, serde_json::json!({ "persons": [1, 2] }));
    }

    #[test]
    fn test_mutation_shape() {
        let body =
            serde_json::to_value(Envelope::with_message("Created", "person", 7)).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Created", "person": 7 }));
    }
}
