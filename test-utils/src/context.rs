use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a temporary data directory.
///
/// Every context gets its own directory under the system temp dir so tests can run in
/// parallel without sharing files. The directory and everything in it is removed when
/// the context is dropped.
pub struct TestContext {
    /// Root of the temporary data directory.
    dir: TempDir,
}

impl TestContext {
    /// Creates a fresh, empty data directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an existing empty directory
    /// - `Err(TestError::Io)` - The directory could not be created
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::Builder::new().prefix("honeymoon-test-").tempdir()?;

        Ok(Self { dir })
    }

    /// Path of the data directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the data directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<(), TestError> {
        fs::write(self.path(name), content)?;
        Ok(())
    }

    pub fn read_file(&self, name: &str) -> Result<String, TestError> {
        Ok(fs::read_to_string(self.path(name))?)
    }

    /// Reads a file back as JSON, for asserting on what the code under test wrote.
    pub fn read_json(&self, name: &str) -> Result<Value, TestError> {
        let content = self.read_file(name)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
