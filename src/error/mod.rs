//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, repositories and command
//! handlers. Domain-specific failures live in their own modules; those a handler only
//! propagates are wrapped via `#[from]`, while `WaitListError` is matched where it occurs.

pub mod config;
pub mod storage;
pub mod wait_list;

use thiserror::Error;

use crate::error::{config::ConfigError, storage::StorageError};

/// Top-level application error type.
///
/// Aggregates every error that can occur while polling the map, persisting state or
/// talking to Discord. Event handlers log these and carry on; only startup treats them
/// as fatal.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Reading or writing one of the persisted JSON files failed.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// HTTP client request error from reqwest.
    ///
    /// Raised by the map status fetcher on connection failures and timeouts.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// JSON decoding error, typically an unexpected map status body.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Generic I/O error outside of the persisted files (signal handlers, etc.).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
