//! Factories for map status bodies.

use serde_json::{json, Value};

/// Creates a player entry with the fields the map reports.
///
/// Includes a few fields the bot ignores (`world`, `health`, `account`) so tests exercise
/// tolerant decoding.
///
/// # Arguments
/// - `name` - Player name
/// - `x`, `y`, `z` - World coordinates
///
/// # Returns
/// - `Value` - JSON object for the `players` array
pub fn player(name: &str, x: f64, y: f64, z: f64) -> Value {
    json!({
        "name": name,
        "account": name,
        "world": "world",
        "health": 20,
        "armor": 0,
        "type": "player",
        "x": x,
        "y": y,
        "z": z,
    })
}

/// Creates a status body with clear weather.
pub fn map_status(players: &[Value]) -> Value {
    map_status_with_weather(players, false, false)
}

/// Creates a status body with explicit weather flags.
///
/// # Arguments
/// - `players` - Entries created with [`player`]
/// - `has_storm` - Whether it is raining
/// - `is_thundering` - Whether the storm has thunder
///
/// # Returns
/// - `Value` - JSON body as returned by the map endpoint
pub fn map_status_with_weather(players: &[Value], has_storm: bool, is_thundering: bool) -> Value {
    json!({
        "currentcount": players.len(),
        "hasStorm": has_storm,
        "isThundering": is_thundering,
        "servertime": 6000,
        "timestamp": 1_700_000_000_000_i64,
        "players": players,
        "updates": [],
    })
}
