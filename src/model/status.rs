//! Map status payload returned by the dynamic map endpoint.

use serde::Deserialize;

/// Body of the map status endpoint.
///
/// Only the fields the bot reads are modelled; the endpoint returns many more
/// (world time, updates, etc.) which serde ignores.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapStatus {
    #[serde(default)]
    pub players: Vec<StatusPlayer>,
    #[serde(default, rename = "hasStorm")]
    pub has_storm: Option<bool>,
    #[serde(default, rename = "isThundering")]
    pub is_thundering: Option<bool>,
}

impl MapStatus {
    /// Names of the online players, in the order the endpoint listed them.
    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}

/// One online player as reported by the map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusPlayer {
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl StatusPlayer {
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// World coordinates of a player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Returns true when any axis differs from `other` by more than `epsilon`.
    pub fn moved_from(&self, other: &Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() > epsilon
            || (self.y - other.y).abs() > epsilon
            || (self.z - other.z).abs() > epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_dynmap_body_ignoring_unknown_fields() {
        let body = serde_json::json!({
            "currentcount": 2,
            "hasStorm": true,
            "isThundering": false,
            "servertime": 1234,
            "players": [
                { "name": "Alice", "x": 1.5, "y": 64.0, "z": -3.0, "world": "world", "health": 20 },
                { "name": "Bob", "x": 0.0, "y": 70.0, "z": 0.0 }
            ]
        });

        let status: MapStatus = serde_json::from_value(body).unwrap();

        assert_eq!(status.player_names(), vec!["Alice", "Bob"]);
        assert_eq!(status.has_storm, Some(true));
        assert_eq!(status.is_thundering, Some(false));
        assert_eq!(
            status.players[0].position(),
            Position {
                x: 1.5,
                y: 64.0,
                z: -3.0
            }
        );
    }

    #[test]
    fn missing_players_means_empty_roster() {
        let status: MapStatus = serde_json::from_str("{}").unwrap();
        assert!(status.players.is_empty());
    }

    #[test]
    fn movement_is_measured_per_axis_against_epsilon() {
        let origin = Position::default();
        let nudged = Position {
            x: 0.0,
            y: 1e-11,
            z: 0.0,
        };
        let moved = Position {
            x: 0.0,
            y: 0.0,
            z: 1e-9,
        };

        assert!(!nudged.moved_from(&origin, 1e-10));
        assert!(moved.moved_from(&origin, 1e-10));
    }
}
