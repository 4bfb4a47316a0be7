//! Building and Room records copied verbatim from graph nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Opaque node properties keyed by property name.
///
/// The upstream schema is not fixed, so values are kept as JSON.
pub type Properties = serde_json::Map<String, JsonValue>;

/// A building node, identified by its `uri` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Building(pub Properties);

/// A room node, identified by its `uri` property and attached to a
/// building through `hasPart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room(pub Properties);

impl Building {
    /// Returns the building URI, if the node carries one.
    pub fn uri(&self) -> Option<&str> {
        self.0.get("uri").and_then(JsonValue::as_str)
    }
}

impl Room {
    /// Returns the room URI, if the node carries one.
    pub fn uri(&self) -> Option<&str> {
        self.0.get("uri").and_then(JsonValue::as_str)
    }
}
