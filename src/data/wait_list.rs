use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    data::{DataStore, WAIT_LIST_FILE},
    error::storage::StorageError,
};

/// Observer id → watched names, the in-memory shape of the wait list.
pub type WaitListEntries = BTreeMap<u64, BTreeSet<String>>;

/// Empty JSON object stored as the value of every watched name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WaitMarker {}

/// On-disk shape: `{"<observerId>": {"<name>": {}}}`.
type WaitListFile = BTreeMap<u64, BTreeMap<String, WaitMarker>>;

pub struct WaitListRepository<'a> {
    store: &'a DataStore,
}

impl<'a> WaitListRepository<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<WaitListEntries, StorageError> {
        let file: WaitListFile = self.store.read_json(WAIT_LIST_FILE)?;

        Ok(file
            .into_iter()
            .map(|(observer, names)| (observer, names.into_keys().collect()))
            .filter(|(_, names): &(u64, BTreeSet<String>)| !names.is_empty())
            .collect())
    }

    pub fn save(&self, entries: &WaitListEntries) -> Result<(), StorageError> {
        let file: WaitListFile = entries
            .iter()
            .map(|(observer, names)| {
                (
                    *observer,
                    names
                        .iter()
                        .map(|name| (name.clone(), WaitMarker::default()))
                        .collect(),
                )
            })
            .collect();

        self.store.write_json(WAIT_LIST_FILE, &file)
    }
}
