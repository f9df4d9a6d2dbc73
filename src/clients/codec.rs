//! Decoding of raw response bodies.
//!
//! Shapes that map onto [`Playlist`] are decoded strictly through serde, the
//! rest of the catalog payloads are walked as untyped [`Value`] trees.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::{
    entities::Playlist,
    errors::{Error, Result},
};

pub fn decode_playlist(body: &str) -> Result<Playlist> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_tree(body: &str) -> Result<Value> {
    Ok(serde_json::from_str(body)?)
}

/// Looks up `key` on a JSON object, failing if the node is not an object or the key is missing.
pub fn field<'a>(node: &'a Value, key: &str) -> Result<&'a Value> {
    let object = node
        .as_object()
        .ok_or_else(|| Error::ParseError(format!("expected an object holding `{key}`")))?;
    object
        .get(key)
        .ok_or_else(|| Error::ParseError(format!("missing field `{key}`")))
}

/// The `items` array of a collection object.
///
/// An absent or null `items` is treated as an empty collection.
pub fn items(node: &Value) -> Result<&[Value]> {
    let object = node
        .as_object()
        .ok_or_else(|| Error::ParseError("expected a collection object".into()))?;
    match object.get("items") {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(Error::ParseError(format!(
            "expected `items` to be an array, got {other}"
        ))),
    }
}

/// Strings come back as-is, every other JSON value as its compact JSON text.
pub fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Strictly decodes every element of a JSON array as a [`Playlist`].
pub fn parse_playlists(items: &[Value]) -> Result<Vec<Playlist>> {
    items
        .iter()
        .map(|item| Playlist::deserialize(item).map_err(Error::from))
        .collect()
}
