//! Online roster tracking.
//!
//! The tracker owns the set of players currently online together with their last known
//! position and AFK state. Each poll of the map is applied with [`RosterTracker::apply`],
//! which diffs the fresh player list against the tracked one and reports who left and who
//! arrived so the caller can update history and fire wait-list notifications.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    roster::{PresenceStatus, RosterEntry, RosterUpdate},
    status::StatusPlayer,
};

/// Positions closer than this on every axis count as "not moved".
pub const MOVEMENT_EPSILON: f64 = 1e-10;

pub struct RosterTracker {
    /// Names online after the last poll, in the order the map listed them.
    online: Vec<String>,
    entries: HashMap<String, RosterEntry>,
    afk_threshold: Duration,
}

impl RosterTracker {
    pub fn new(afk_threshold: Duration) -> Self {
        Self {
            online: Vec::new(),
            entries: HashMap::new(),
            afk_threshold,
        }
    }

    /// Applies a freshly fetched player list.
    ///
    /// Departed players are the ones online on the previous poll but missing now; arrived
    /// players are current names without a roster entry. Tracked players get their AFK
    /// state refreshed: moving further than [`MOVEMENT_EPSILON`] on any axis clears it,
    /// standing still for longer than the idle threshold sets it.
    ///
    /// # Arguments
    /// - `players` - Players reported by the map this poll
    /// - `now` - Poll time used for movement timestamps
    ///
    /// # Returns
    /// - `RosterUpdate` - Departed and arrived names plus the new online count
    pub fn apply(&mut self, players: &[StatusPlayer], now: DateTime<Utc>) -> RosterUpdate {
        let mut current: Vec<String> = Vec::with_capacity(players.len());
        let mut seen: HashSet<&str> = HashSet::with_capacity(players.len());
        for player in players {
            if seen.insert(player.name.as_str()) {
                current.push(player.name.clone());
            }
        }

        let departed: Vec<String> = self
            .online
            .iter()
            .filter(|name| !seen.contains(name.as_str()))
            .cloned()
            .collect();
        let arrived: Vec<String> = current
            .iter()
            .filter(|name| !self.entries.contains_key(name.as_str()))
            .cloned()
            .collect();

        for name in &departed {
            self.entries.remove(name);
        }
        // Entries can outlive `online` only if a name was tracked without being listed;
        // keep the two in step so the roster always equals the latest fetch.
        self.entries.retain(|name, _| seen.contains(name.as_str()));

        for player in players {
            let position = player.position();
            match self.entries.get_mut(&player.name) {
                None => {
                    self.entries.insert(
                        player.name.clone(),
                        RosterEntry {
                            position,
                            last_moved_at: now,
                            afk: false,
                        },
                    );
                }
                Some(entry) => {
                    if position.moved_from(&entry.position, MOVEMENT_EPSILON) {
                        entry.last_moved_at = now;
                        entry.afk = false;
                    } else if now - entry.last_moved_at > self.afk_threshold {
                        entry.afk = true;
                    }
                    entry.position = position;
                }
            }
        }

        self.online = current;

        RosterUpdate {
            departed,
            arrived,
            online_count: self.online.len(),
        }
    }

    pub fn online(&self) -> &[String] {
        &self.online
    }

    pub fn entry(&self, name: &str) -> Option<&RosterEntry> {
        self.entries.get(name)
    }

    pub fn status_of(&self, name: &str) -> PresenceStatus {
        match self.entries.get(name) {
            Some(entry) if entry.afk => PresenceStatus::Afk,
            Some(_) => PresenceStatus::Online,
            None => PresenceStatus::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::MapStatus;
    use chrono::TimeZone;
    use test_utils::factory::status::{map_status, player};

    fn players(values: &[serde_json::Value]) -> Vec<StatusPlayer> {
        let status: MapStatus = serde_json::from_value(map_status(values)).unwrap();
        status.players
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    fn tracker() -> RosterTracker {
        RosterTracker::new(Duration::seconds(60))
    }

    #[test]
    fn first_poll_reports_everyone_as_arrived() {
        let mut roster = tracker();

        let update = roster.apply(
            &players(&[player("Alice", 0.0, 0.0, 0.0), player("Bob", 1.0, 1.0, 1.0)]),
            at(0),
        );

        assert!(update.departed.is_empty());
        assert_eq!(update.arrived, vec!["Alice", "Bob"]);
        assert_eq!(update.online_count, 2);
        assert_eq!(roster.online(), ["Alice", "Bob"]);
    }

    #[test]
    fn diff_reports_departed_and_arrived() {
        let mut roster = tracker();
        roster.apply(
            &players(&[player("Alice", 0.0, 0.0, 0.0), player("Bob", 0.0, 0.0, 0.0)]),
            at(0),
        );

        let update = roster.apply(
            &players(&[player("Bob", 0.0, 0.0, 0.0), player("Carol", 0.0, 0.0, 0.0)]),
            at(2),
        );

        assert_eq!(update.departed, vec!["Alice"]);
        assert_eq!(update.arrived, vec!["Carol"]);
        assert_eq!(roster.online(), ["Bob", "Carol"]);
        assert_eq!(roster.status_of("Alice"), PresenceStatus::Offline);
        assert_eq!(update.transitions().count(), 2);
    }

    #[test]
    fn tracked_set_always_equals_latest_fetch() {
        let mut roster = tracker();
        let polls: Vec<Vec<&str>> = vec![
            vec!["A", "B", "C"],
            vec!["C", "D"],
            vec![],
            vec!["A", "A", "E"],
            vec!["E"],
        ];

        for (tick, names) in polls.into_iter().enumerate() {
            let values: Vec<_> = names.iter().map(|n| player(n, 0.0, 0.0, 0.0)).collect();
            roster.apply(&players(&values), at(tick as i64));

            let mut expected: Vec<&str> = names.clone();
            expected.dedup();
            assert_eq!(roster.online(), expected.as_slice());
            for name in &expected {
                assert_ne!(roster.status_of(name), PresenceStatus::Offline);
            }
        }
    }

    #[test]
    fn becomes_afk_after_idle_threshold() {
        let mut roster = tracker();
        let still = players(&[player("Alice", 5.0, 64.0, 5.0)]);

        roster.apply(&still, at(0));
        roster.apply(&still, at(60));
        assert_eq!(roster.status_of("Alice"), PresenceStatus::Online);

        roster.apply(&still, at(61));
        assert_eq!(roster.status_of("Alice"), PresenceStatus::Afk);
    }

    #[test]
    fn movement_clears_afk_and_resets_timer() {
        let mut roster = tracker();
        roster.apply(&players(&[player("Alice", 0.0, 0.0, 0.0)]), at(0));
        roster.apply(&players(&[player("Alice", 0.0, 0.0, 0.0)]), at(100));
        assert_eq!(roster.status_of("Alice"), PresenceStatus::Afk);

        roster.apply(&players(&[player("Alice", 0.5, 0.0, 0.0)]), at(101));
        assert_eq!(roster.status_of("Alice"), PresenceStatus::Online);
        assert_eq!(roster.entry("Alice").unwrap().last_moved_at, at(101));

        roster.apply(&players(&[player("Alice", 0.5, 0.0, 0.0)]), at(150));
        assert_eq!(roster.status_of("Alice"), PresenceStatus::Online);
    }

    #[test]
    fn jitter_below_epsilon_is_not_movement() {
        let mut roster = tracker();
        roster.apply(&players(&[player("Alice", 0.0, 0.0, 0.0)]), at(0));

        roster.apply(&players(&[player("Alice", 1e-11, 0.0, 0.0)]), at(100));

        assert_eq!(roster.status_of("Alice"), PresenceStatus::Afk);
        assert_eq!(roster.entry("Alice").unwrap().last_moved_at, at(0));
    }

    #[test]
    fn rejoining_player_arrives_again() {
        let mut roster = tracker();
        roster.apply(&players(&[player("Alice", 0.0, 0.0, 0.0)]), at(0));
        roster.apply(&players(&[]), at(2));

        let update = roster.apply(&players(&[player("Alice", 0.0, 0.0, 0.0)]), at(4));

        assert_eq!(update.arrived, vec!["Alice"]);
    }
}
