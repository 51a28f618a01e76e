//! Character information records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text shown for characters without a description until someone writes one.
pub const DEFAULT_DESCRIPTION: &str = "загрузка...";

/// Reserved key of the global lock flag in `user_info.json`.
pub const GLOBAL_LOCK_KEY: &str = "_global_lock";
/// Reserved key of the default description in `user_info.json`.
pub const DEFAULT_KEY: &str = "_default";

/// Whether `name` collides with one of the reserved file keys and cannot own a record.
pub fn is_reserved_name(name: &str) -> bool {
    name == GLOBAL_LOCK_KEY || name == DEFAULT_KEY
}

/// Information about a single character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// When the character last went online or offline, stored as epoch milliseconds.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_seen_at: Option<DateTime<Utc>>,
    /// Locked records can only be edited by the owner.
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
}

/// Contents of `user_info.json`:
/// `{"_global_lock": bool, "_default": str, "<name>": UserInfo}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoBook {
    /// When set, only the owner may edit any record.
    #[serde(rename = "_global_lock", default)]
    pub global_lock: bool,
    /// Description shown for records without their own.
    #[serde(rename = "_default", default = "default_description")]
    pub default_description: String,
    #[serde(flatten)]
    pub records: BTreeMap<String, UserInfo>,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Default for UserInfoBook {
    fn default() -> Self {
        Self {
            global_lock: false,
            default_description: default_description(),
            records: BTreeMap::new(),
        }
    }
}

impl UserInfoBook {
    pub fn get(&self, name: &str) -> Option<&UserInfo> {
        self.records.get(name)
    }

    /// Returns the record for `name`, creating an empty unlocked one when absent.
    ///
    /// Reserved names get `None`; they would clash with the file's own keys.
    pub fn entry(&mut self, name: &str) -> Option<&mut UserInfo> {
        if is_reserved_name(name) {
            return None;
        }
        Some(self.records.entry(name.to_string()).or_default())
    }

    /// Stamps `last_seen_at = now` on every given name, creating records as needed.
    /// Reserved names are skipped.
    ///
    /// # Returns
    /// - Number of records touched; zero means nothing needs saving
    pub fn touch_seen<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a String>,
        now: DateTime<Utc>,
    ) -> usize {
        let mut touched = 0;
        for name in names {
            if let Some(info) = self.entry(name) {
                info.last_seen_at = Some(now);
                touched += 1;
            }
        }
        touched
    }

    /// Whether a non-owner may edit the record for `name`.
    pub fn is_editable(&self, name: &str) -> bool {
        !self.global_lock && !self.get(name).is_some_and(|info| info.locked)
    }

    pub fn description_of(&self, name: &str) -> &str {
        self.get(name)
            .and_then(|info| info.description.as_deref())
            .unwrap_or(&self.default_description)
    }

    /// Drops every record, keeping the default description and resetting the global lock.
    pub fn clear(&mut self) {
        self.records.clear();
        self.global_lock = false;
    }
}
