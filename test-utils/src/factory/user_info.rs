//! Factories for `user_info.json`.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

/// Builder for a single character record.
pub struct UserInfoFactory {
    last_seen_at: Option<DateTime<Utc>>,
    locked: bool,
    description: Option<String>,
    art: Option<String>,
}

impl UserInfoFactory {
    /// Creates an unlocked record with no history and no description.
    pub fn new() -> Self {
        Self {
            last_seen_at: None,
            locked: false,
            description: None,
            art: None,
        }
    }

    pub fn last_seen_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_seen_at = Some(at);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn art(mut self, art: &str) -> Self {
        self.art = Some(art.to_string());
        self
    }

    /// Builds the record as it appears in the file.
    pub fn build(self) -> Value {
        let mut record = Map::new();
        if let Some(at) = self.last_seen_at {
            record.insert("lastSeenAt".to_string(), json!(at.timestamp_millis()));
        }
        record.insert("locked".to_string(), Value::Bool(self.locked));
        if let Some(description) = self.description {
            record.insert("description".to_string(), Value::String(description));
        }
        if let Some(art) = self.art {
            record.insert("art".to_string(), Value::String(art));
        }
        Value::Object(record)
    }
}

impl Default for UserInfoFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a user info file document.
///
/// # Arguments
/// - `global_lock` - Value of `_global_lock`
/// - `records` - Name and record pairs built with [`UserInfoFactory`]
///
/// # Returns
/// - `Value` - JSON object in the persisted shape
pub fn user_info_file(global_lock: bool, records: Vec<(&str, Value)>) -> Value {
    let mut map = Map::new();
    map.insert("_global_lock".to_string(), Value::Bool(global_lock));
    map.insert(
        "_default".to_string(),
        Value::String("загрузка...".to_string()),
    );
    for (name, record) in records {
        map.insert(name.to_string(), record);
    }
    Value::Object(map)
}
