//! State shared by the event handlers, the scheduler and presenter tasks.
//!
//! `AppState` is cloned into every handler and job. All mutable bot data sits behind a
//! single `RwLock` in [`BotState`], so roster updates from the poll job and edits made by
//! commands are applied one at a time in the order they acquire the lock.

use std::{collections::HashMap, sync::Arc};

use chrono::{NaiveDate, TimeDelta};
use tokio::sync::{Notify, RwLock};

use crate::{
    bot::{gateway::Gateway, presenter::PresenterRegistry},
    config::Config,
    data::{
        avatar::AvatarRepository, online_record::OnlineRecordRepository,
        user_info::UserInfoRepository, wait_list::WaitListRepository,
        will_list::WillListRepository, DataStore,
    },
    error::storage::StorageError,
    model::{avatar::AvatarBook, online_record::OnlineRecord, user_info::UserInfoBook},
    service::{
        roster::RosterTracker, status::StatusClient, wait_list::WaitRegistry,
        will_list::WillList,
    },
};

/// Mutable bot data.
pub struct BotState {
    pub roster: RosterTracker,
    pub online_record: OnlineRecord,
    pub user_info: UserInfoBook,
    pub avatars: AvatarBook,
    pub will_list: WillList,
    pub wait_list: WaitRegistry,
}

impl BotState {
    /// Loads every persisted file from the data directory.
    ///
    /// Missing files start out empty; a file that exists but cannot be parsed is an error.
    ///
    /// # Arguments
    /// - `store` - Data directory
    /// - `config` - Supplies the AFK threshold and wait list limit
    /// - `today` - Current UTC day, used to discard a stale will list
    ///
    /// # Returns
    /// - `Ok(BotState)` - Loaded state with an empty roster
    /// - `Err(StorageError)` - A file could not be read or parsed
    pub fn load(store: &DataStore, config: &Config, today: NaiveDate) -> Result<Self, StorageError> {
        let afk_threshold = TimeDelta::from_std(config.afk_threshold).unwrap_or(TimeDelta::MAX);

        Ok(Self {
            roster: RosterTracker::new(afk_threshold),
            online_record: OnlineRecordRepository::new(store).load()?,
            user_info: UserInfoRepository::new(store).load()?,
            avatars: AvatarRepository::new(store).load()?,
            will_list: WillList::restore(WillListRepository::new(store).load()?, today),
            wait_list: WaitRegistry::new(
                WaitListRepository::new(store).load()?,
                config.max_users_to_wait,
            ),
        })
    }

    /// Re-reads avatars and character info, replacing the in-memory copies.
    pub fn reload_users(&mut self, store: &DataStore) -> Result<(), StorageError> {
        let avatars = AvatarRepository::new(store).load()?;
        let user_info = UserInfoRepository::new(store).load()?;
        self.avatars = avatars;
        self.user_info = user_info;
        Ok(())
    }
}

/// Application state containing shared resources.
///
/// Cheap to clone: every field is either reference counted or a small handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Directory holding the persisted files.
    pub store: DataStore,
    pub status_client: StatusClient,
    pub bot: Arc<RwLock<BotState>>,
    /// Live paginated messages, keyed by message id.
    pub presenters: PresenterRegistry,
    /// Notified when the process should shut down (owner `reset` command).
    pub shutdown: Arc<Notify>,
    /// Registered slash command ids by name, for `</name:id>` mentions in help.
    pub slash_commands: Arc<RwLock<HashMap<String, u64>>>,
    /// Connection refreshed on every `ready`.
    pub gateway: Arc<RwLock<Gateway>>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: DataStore,
        status_client: StatusClient,
        bot: BotState,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            status_client,
            bot: Arc::new(RwLock::new(bot)),
            presenters: PresenterRegistry::default(),
            shutdown: Arc::new(Notify::new()),
            slash_commands: Arc::new(RwLock::new(HashMap::new())),
            gateway: Arc::new(RwLock::new(Gateway::default())),
        }
    }
}
