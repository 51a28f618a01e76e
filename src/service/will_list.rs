//! "Will visit today" list scoped to one UTC day.

use chrono::NaiveDate;

use crate::{
    data::will_list::{StoredWillList, WillListEntries},
    model::cap_name,
    service::format::truncate_chars,
};

/// Longest comment kept for a will-list entry.
pub const MAX_COMMENT_LENGTH: usize = 100;

pub struct WillList {
    entries: WillListEntries,
    day: NaiveDate,
}

impl WillList {
    /// Restores the list read from disk; entries written on another day are discarded.
    pub fn restore(stored: StoredWillList, today: NaiveDate) -> Self {
        let mut list = Self {
            entries: stored.entries,
            day: stored.modified_on.unwrap_or(today),
        };
        list.roll_over(today);
        list
    }

    /// Clears the list when `today` is not the day it belongs to.
    ///
    /// # Returns
    /// - `true` if entries were dropped and the list should be saved
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.day == today {
            return false;
        }
        self.day = today;
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Adds or replaces the entry for `name`.
    pub fn add(&mut self, name: &str, comment: &str) {
        self.entries.insert(
            cap_name(name),
            truncate_chars(comment.trim(), MAX_COMMENT_LENGTH),
        );
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(&cap_name(name)).is_some()
    }

    /// Entries sorted by name.
    pub fn list(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &WillListEntries {
        &self.entries
    }
}
