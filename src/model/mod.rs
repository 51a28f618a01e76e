//! Domain models shared by the services, repositories and command handlers.
//!
//! Models that are persisted (`avatar`, `user_info`, `online_record`) derive serde
//! with the exact field names of the on-disk JSON files; the rest are in-memory only.

pub mod avatar;
pub mod online_record;
pub mod roster;
pub mod status;
pub mod user_info;

/// Maximum number of characters kept from a player name supplied by a user or shown in a list.
pub const MAX_NAME_LENGTH: usize = 30;

/// Truncates a player name to [`MAX_NAME_LENGTH`] characters.
pub fn cap_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LENGTH).collect()
}
