//! Per-character emoji avatars.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved key of the display flag in `avatars.json`.
pub const APPLY_KEY: &str = "_apply";

/// Avatar map as stored in `avatars.json`: `{"_apply": bool, "<name>": "<emoji>"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarBook {
    /// Whether list entries are prefixed with the avatar emoji.
    #[serde(rename = "_apply", default)]
    pub apply: bool,
    #[serde(flatten)]
    pub avatars: BTreeMap<String, String>,
}

impl AvatarBook {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.avatars.get(name).map(String::as_str)
    }

    /// Sets the emoji for `name`. The reserved flag key cannot be used as a name.
    pub fn set(&mut self, name: &str, emoji: &str) -> bool {
        if name == APPLY_KEY {
            return false;
        }
        self.avatars.insert(name.to_string(), emoji.to_string());
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.avatars.remove(name).is_some()
    }

    /// Removes every avatar while keeping the display flag.
    pub fn clear(&mut self) {
        self.avatars.clear();
    }

    /// Names with an avatar, sorted.
    pub fn names(&self) -> Vec<String> {
        self.avatars.keys().cloned().collect()
    }

    /// `display` prefixed with the avatar of `name`, or with `unknown` when it has none.
    ///
    /// `display` is the already escaped form of `name` shown to users.
    pub fn decorate(&self, name: &str, display: &str, unknown: &str) -> String {
        format!("{} {display}", self.get(name).unwrap_or(unknown))
    }
}

/// Builds the CDN image URL for a custom emoji token such as `<:name:123>` or `<a:name:123>`.
///
/// Returns `None` for unicode emoji and malformed tokens.
pub fn emoji_image_url(token: &str) -> Option<String> {
    let inner = token.strip_prefix('<')?.strip_suffix('>')?;
    let (animated, rest) = match inner.strip_prefix("a:") {
        Some(rest) => (true, rest),
        None => (false, inner.strip_prefix(':')?),
    };
    let (_, id) = rest.rsplit_once(':')?;
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let extension = if animated { "gif" } else { "png" };
    Some(format!("https://cdn.discordapp.com/emojis/{id}.{extension}"))
}
