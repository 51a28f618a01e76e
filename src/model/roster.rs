use chrono::{DateTime, Utc};

use crate::model::status::Position;

/// Per-player presence state kept while the player is online.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    /// Last observed position.
    pub position: Position,
    /// When the position last changed by more than the movement epsilon.
    pub last_moved_at: DateTime<Utc>,
    /// Whether the player has been stationary for longer than the idle threshold.
    pub afk: bool,
}

/// Presence of a character as shown next to its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Afk,
    Offline,
}

/// Outcome of applying one poll to the roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterUpdate {
    /// Names that were online on the previous poll and are gone now.
    pub departed: Vec<String>,
    /// Names that appeared and were not tracked before.
    pub arrived: Vec<String>,
    /// Number of players online after the poll.
    pub online_count: usize,
}

impl RosterUpdate {
    /// Names whose online state changed, departures first.
    pub fn transitions(&self) -> impl Iterator<Item = &String> {
        self.departed.iter().chain(self.arrived.iter())
    }
}
