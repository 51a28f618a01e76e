//! One-shot "tell me when X comes online" registry.

use std::collections::BTreeSet;

use crate::{
    data::wait_list::WaitListEntries,
    error::wait_list::WaitListError,
    model::cap_name,
};

/// Notification produced when a watched name comes online.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitNotification {
    pub observer: u64,
    pub name: String,
}

pub struct WaitRegistry {
    entries: WaitListEntries,
    max_watched: usize,
}

impl WaitRegistry {
    pub fn new(entries: WaitListEntries, max_watched: usize) -> Self {
        let mut registry = Self {
            entries,
            max_watched,
        };
        registry.compact();
        registry
    }

    /// Adds `name` to the observer's watch set.
    ///
    /// Watching a name that is already watched succeeds without growing the set.
    ///
    /// # Arguments
    /// - `observer` - Discord user id of the watcher
    /// - `name` - Character name, capped to the maximum name length
    ///
    /// # Returns
    /// - `Ok(true)` - The name was added
    /// - `Ok(false)` - The name was already watched
    /// - `Err(WaitListError::CapacityReached)` - Observer is at the limit; nothing changed
    pub fn watch(&mut self, observer: u64, name: &str) -> Result<bool, WaitListError> {
        let name = cap_name(name);
        let watched = self.entries.get(&observer);

        if watched.is_some_and(|names| names.contains(&name)) {
            return Ok(false);
        }
        if watched.map_or(0, BTreeSet::len) >= self.max_watched {
            return Err(WaitListError::CapacityReached {
                limit: self.max_watched,
            });
        }

        Ok(self.entries.entry(observer).or_default().insert(name))
    }

    /// Removes `name` from the observer's watch set, dropping the observer when emptied.
    pub fn unwatch(&mut self, observer: u64, name: &str) -> bool {
        let name = cap_name(name);
        let Some(names) = self.entries.get_mut(&observer) else {
            return false;
        };
        let removed = names.remove(&name);
        if names.is_empty() {
            self.entries.remove(&observer);
        }
        removed
    }

    /// Removes `name` from every observer and returns one notification per observer.
    pub fn resolve(&mut self, name: &str) -> Vec<WaitNotification> {
        let mut notifications = Vec::new();
        for (observer, names) in self.entries.iter_mut() {
            if names.remove(name) {
                notifications.push(WaitNotification {
                    observer: *observer,
                    name: name.to_string(),
                });
            }
        }
        if !notifications.is_empty() {
            self.compact();
        }
        notifications
    }

    /// Resolves every name in `names`, in order.
    pub fn resolve_all<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a String>,
    ) -> Vec<WaitNotification> {
        names
            .into_iter()
            .flat_map(|name| self.resolve(name))
            .collect()
    }

    pub fn watched_by(&self, observer: u64) -> Vec<String> {
        self.entries
            .get(&observer)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &WaitListEntries {
        &self.entries
    }

    fn compact(&mut self) {
        self.entries.retain(|_, names| !names.is_empty());
    }
}
