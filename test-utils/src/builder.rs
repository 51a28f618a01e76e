use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a seeded data directory.
///
/// Provides a fluent interface for configuring the files present in the data directory
/// before the code under test runs. Call `build()` to create the directory and write
/// the files.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_file("online_record.txt", "12")
///     .with_json("will_list.json", serde_json::json!({ "Alice": "after work" }))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// File name and content pairs written during `build()`, in insertion order.
    files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty file list
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a raw text file to the data directory.
    ///
    /// # Arguments
    /// - `name` - File name relative to the data directory
    /// - `content` - Exact file content
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    /// Adds a JSON file to the data directory.
    ///
    /// The value is written compactly, the same way the bot writes its own files.
    ///
    /// # Arguments
    /// - `name` - File name relative to the data directory
    /// - `value` - JSON document to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_json(self, name: &str, value: Value) -> Self {
        let content = value.to_string();
        self.with_file(name, &content)
    }

    /// Creates the data directory and writes every configured file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the populated directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (name, content) in &self.files {
            context.write_file(name, content)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
