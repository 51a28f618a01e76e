use crate::{
    data::{DataStore, USER_INFO_FILE},
    error::storage::StorageError,
    model::user_info::UserInfoBook,
};

pub struct UserInfoRepository<'a> {
    store: &'a DataStore,
}

impl<'a> UserInfoRepository<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Loads all character records.
    ///
    /// # Returns
    /// - `Ok(UserInfoBook)` - Records from disk, or an empty book when the file is missing
    /// - `Err(StorageError)` - The file is unreadable or malformed
    pub fn load(&self) -> Result<UserInfoBook, StorageError> {
        self.store.read_json(USER_INFO_FILE)
    }

    pub fn save(&self, book: &UserInfoBook) -> Result<(), StorageError> {
        self.store.write_json(USER_INFO_FILE, book)
    }
}
