//! Honeymoon Test Utils
//!
//! Provides shared testing utilities for the honeymoon bot. This crate offers a builder
//! pattern for creating test contexts backed by a throwaway data directory, plus factories
//! for the JSON payloads the bot reads (map status bodies and persisted files).
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for seeding a data directory with files
//! - **TestContext**: Test environment owning the directory, removed on drop
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: JSON factories for map status bodies and persisted records
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[test]
//! fn loads_seeded_avatars() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_json("avatars.json", factory::avatar::avatars(true, &[("Alice", "<:a:1>")]))
//!         .build()?;
//!
//!     let store = DataStore::new(test.dir());
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
