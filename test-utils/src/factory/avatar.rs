//! Factories for `avatars.json`.

use serde_json::{Map, Value};

/// Creates an avatar file document.
///
/// # Arguments
/// - `apply` - Value of the `_apply` display flag
/// - `avatars` - Name and emoji pairs
///
/// # Returns
/// - `Value` - JSON object in the persisted shape
pub fn avatars(apply: bool, avatars: &[(&str, &str)]) -> Value {
    let mut map = Map::new();
    map.insert("_apply".to_string(), Value::Bool(apply));
    for (name, emoji) in avatars {
        map.insert((*name).to_string(), Value::String((*emoji).to_string()));
    }
    Value::Object(map)
}
