use crate::{
    data::{DataStore, ONLINE_RECORD_FILE},
    error::storage::StorageError,
    model::online_record::OnlineRecord,
};

/// Stores the online record as a bare integer in a text file.
pub struct OnlineRecordRepository<'a> {
    store: &'a DataStore,
}

impl<'a> OnlineRecordRepository<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<OnlineRecord, StorageError> {
        let Some(content) = self.store.read_string(ONLINE_RECORD_FILE)? else {
            return Ok(OnlineRecord::default());
        };
        let value = content.trim();
        if value.is_empty() {
            return Ok(OnlineRecord::default());
        }
        value
            .parse::<u64>()
            .map(OnlineRecord::new)
            .map_err(|_| StorageError::InvalidRecord {
                path: self.store.path(ONLINE_RECORD_FILE),
                value: value.to_string(),
            })
    }

    pub fn save(&self, record: OnlineRecord) -> Result<(), StorageError> {
        self.store
            .write_string(ONLINE_RECORD_FILE, &record.value().to_string())
    }
}
