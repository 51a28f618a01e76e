use crate::{
    data::{DataStore, AVATARS_FILE},
    error::storage::StorageError,
    model::avatar::AvatarBook,
};

pub struct AvatarRepository<'a> {
    store: &'a DataStore,
}

impl<'a> AvatarRepository<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Loads the avatar map; a missing file yields an empty map with display disabled.
    pub fn load(&self) -> Result<AvatarBook, StorageError> {
        self.store.read_json(AVATARS_FILE)
    }

    pub fn save(&self, avatars: &AvatarBook) -> Result<(), StorageError> {
        self.store.write_json(AVATARS_FILE, avatars)
    }
}
