//! The current Discord connection as seen by background jobs.
//!
//! `ready` fires again after a reconnect with a fresh [`Context`]. Jobs started on the
//! first `ready` look the context up here on every tick instead of keeping their own copy.

use serenity::all::{ActivityData, Context};

/// Last presence text sent on the current connection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PresenceCache {
    last: Option<String>,
}

impl PresenceCache {
    /// Records `text` and returns it when it differs from what was last sent.
    pub fn change(&mut self, text: String) -> Option<String> {
        if self.last.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last = Some(text.clone());
        Some(text)
    }

    /// Forgets the last text, so the next [`Self::change`] always sends.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Default)]
pub struct Gateway {
    ctx: Option<Context>,
    presence: PresenceCache,
}

impl Gateway {
    /// Replaces the connection after `ready`. Presence set on the old one is forgotten.
    pub fn connect(&mut self, ctx: Context) {
        self.ctx = Some(ctx);
        self.presence.reset();
    }

    pub fn ctx(&self) -> Option<&Context> {
        self.ctx.as_ref()
    }

    /// Shows `text` as a Watching activity when it changed.
    pub fn set_presence(&mut self, text: String) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if let Some(text) = self.presence.change(text) {
            ctx.set_activity(Some(ActivityData::watching(text)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_presence_is_not_resent() {
        let mut cache = PresenceCache::default();

        assert_eq!(cache.change("онлайн [3/20]".to_string()).as_deref(), Some("онлайн [3/20]"));
        assert_eq!(cache.change("онлайн [3/20]".to_string()), None);
        assert_eq!(cache.change("онлайн [4/20]".to_string()).as_deref(), Some("онлайн [4/20]"));
    }

    /// Tests a reconnect that shows the loading text in between two equal counts.
    ///
    /// Expected: the count is sent again after the reset
    #[test]
    fn reset_resends_same_presence() {
        let mut cache = PresenceCache::default();
        cache.change("онлайн [3/20]".to_string());

        cache.reset();

        assert_eq!(cache.change("онлайн [3/20]".to_string()).as_deref(), Some("онлайн [3/20]"));
    }

    #[test]
    fn presence_without_connection_is_kept_pending() {
        let mut gateway = Gateway::default();

        gateway.set_presence("онлайн [3/20]".to_string());

        assert!(gateway.ctx().is_none());
        assert_eq!(
            gateway.presence.change("онлайн [3/20]".to_string()).as_deref(),
            Some("онлайн [3/20]")
        );
    }
}
