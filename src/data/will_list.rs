use std::{collections::BTreeMap, fs};

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    data::{DataStore, WILL_LIST_FILE},
    error::storage::StorageError,
};

/// Name → comment, the in-memory shape of the "will visit today" list.
pub type WillListEntries = BTreeMap<String, String>;

/// Will list as read from disk, together with the UTC day the file was last written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredWillList {
    pub entries: WillListEntries,
    /// `None` when the file does not exist yet.
    pub modified_on: Option<NaiveDate>,
}

pub struct WillListRepository<'a> {
    store: &'a DataStore,
}

impl<'a> WillListRepository<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Loads the list and the day it belongs to.
    ///
    /// The file format carries no date of its own, so the file's modification time decides
    /// which day the entries were written for.
    pub fn load(&self) -> Result<StoredWillList, StorageError> {
        let entries: WillListEntries = self.store.read_json(WILL_LIST_FILE)?;
        let path = self.store.path(WILL_LIST_FILE);

        let modified_on = match fs::metadata(&path) {
            Ok(metadata) => metadata
                .modified()
                .ok()
                .map(|time| DateTime::<Utc>::from(time).date_naive()),
            Err(_) => None,
        };

        Ok(StoredWillList {
            entries,
            modified_on,
        })
    }

    pub fn save(&self, entries: &WillListEntries) -> Result<(), StorageError> {
        self.store.write_json(WILL_LIST_FILE, entries)
    }
}
