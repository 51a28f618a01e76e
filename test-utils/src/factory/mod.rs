//! Factory methods for creating test data.
//!
//! Factories build the JSON documents the bot consumes: map status bodies as returned by
//! the dynamic map, and the persisted files in the data directory. Values are plain
//! `serde_json::Value`s so tests deserialize them through the same code paths the bot uses.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let body = factory::status::map_status(&[
//!     factory::status::player("Alice", 0.0, 64.0, 0.0),
//!     factory::status::player("Bob", 10.0, 64.0, -5.0),
//! ]);
//! let status: MapStatus = serde_json::from_value(body)?;
//! ```

pub mod avatar;
pub mod status;
pub mod user_info;
