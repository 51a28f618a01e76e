//! Applies map polls to the bot state.
//!
//! A poll updates the roster first, then derives everything else from the roster diff:
//! the online record, the "last seen" stamps in character info and the wait list
//! notifications. Each derived change is persisted right away; a failed write is logged
//! and does not undo the in-memory update.

use chrono::{DateTime, Utc};

use crate::{
    config::FetchFailurePolicy,
    data::{
        online_record::OnlineRecordRepository, user_info::UserInfoRepository,
        wait_list::WaitListRepository, DataStore,
    },
    model::{roster::RosterUpdate, status::StatusPlayer},
    service::wait_list::WaitNotification,
    state::BotState,
};

/// What a poll changed, for the caller to act on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollOutcome {
    pub update: RosterUpdate,
    /// Direct messages to send to observers, one per observer and arrived name.
    pub notifications: Vec<WaitNotification>,
    pub record_raised: bool,
}

pub struct PollService<'a> {
    store: &'a DataStore,
}

impl<'a> PollService<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Applies a successful fetch.
    ///
    /// # Arguments
    /// - `state` - Bot state, locked for writing by the caller
    /// - `players` - Players reported by the map
    /// - `now` - Poll time
    ///
    /// # Returns
    /// - `PollOutcome` - Roster diff and wait list notifications to deliver
    pub fn apply(
        &self,
        state: &mut BotState,
        players: &[StatusPlayer],
        now: DateTime<Utc>,
    ) -> PollOutcome {
        let update = state.roster.apply(players, now);
        self.derive(state, update, now)
    }

    /// Applies a failed fetch according to the configured policy.
    ///
    /// # Returns
    /// - `None` - State left untouched (`Skip`)
    /// - `Some(PollOutcome)` - Everyone departed (`ClearRoster`)
    pub fn apply_failure(
        &self,
        state: &mut BotState,
        policy: FetchFailurePolicy,
        now: DateTime<Utc>,
    ) -> Option<PollOutcome> {
        match policy {
            FetchFailurePolicy::Skip => None,
            FetchFailurePolicy::ClearRoster => Some(self.apply(state, &[], now)),
        }
    }

    fn derive(&self, state: &mut BotState, update: RosterUpdate, now: DateTime<Utc>) -> PollOutcome {
        let record_raised = state.online_record.observe(update.online_count);
        if record_raised {
            if let Err(e) = OnlineRecordRepository::new(self.store).save(state.online_record) {
                tracing::error!("Failed to save online record: {}", e);
            }
        }

        if state.user_info.touch_seen(update.transitions(), now) > 0 {
            if let Err(e) = UserInfoRepository::new(self.store).save(&state.user_info) {
                tracing::error!("Failed to save user info: {}", e);
            }
        }

        let notifications = state.wait_list.resolve_all(&update.arrived);
        if !notifications.is_empty() {
            if let Err(e) = WaitListRepository::new(self.store).save(state.wait_list.entries()) {
                tracing::error!("Failed to save wait list: {}", e);
            }
        }

        if !update.departed.is_empty() || !update.arrived.is_empty() {
            tracing::debug!(
                "Roster changed: departed {:?}, arrived {:?}, online {}",
                update.departed,
                update.arrived,
                update.online_count
            );
        }

        PollOutcome {
            update,
            notifications,
            record_raised,
        }
    }
}
