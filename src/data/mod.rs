//! Flat-file repository layer.
//!
//! Every piece of persistent bot state lives in its own JSON (or plain text) file inside
//! the data directory. Repositories borrow a [`DataStore`] the way database repositories
//! borrow a connection, and convert between the on-disk shape and domain models. Reads and
//! writes are synchronous: the files are tiny and every write happens under the state lock.

pub mod avatar;
pub mod online_record;
pub mod user_info;
pub mod wait_list;
pub mod will_list;

#[cfg(test)]
mod test;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::storage::StorageError;

pub const AVATARS_FILE: &str = "avatars.json";
pub const USER_INFO_FILE: &str = "user_info.json";
pub const WILL_LIST_FILE: &str = "will_list.json";
pub const WAIT_LIST_FILE: &str = "wait_list.json";
pub const ONLINE_RECORD_FILE: &str = "online_record.txt";

/// Handle to the directory holding the persisted files.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })
    }

    /// Reads a file as a string.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - File content
    /// - `Ok(None)` - The file does not exist yet
    /// - `Err(StorageError::Read)` - Any other I/O failure
    pub(crate) fn read_string(&self, file_name: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(file_name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    pub(crate) fn write_string(&self, file_name: &str, content: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let path = self.path(file_name);
        fs::write(&path, content).map_err(|source| StorageError::Write { path, source })
    }

    /// Loads a JSON file, falling back to `T::default()` when the file is missing.
    pub(crate) fn read_json<T>(&self, file_name: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(content) = self.read_string(file_name)? else {
            return Ok(T::default());
        };
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path(file_name),
            source,
        })
    }

    pub(crate) fn write_json<T: Serialize>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let content = serde_json::to_string(value).map_err(|source| StorageError::Parse {
            path: self.path(file_name),
            source,
        })?;
        self.write_string(file_name, &content)
    }
}
