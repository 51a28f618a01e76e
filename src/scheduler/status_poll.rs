//! Map status poll.
//!
//! Every tick fetches the map, applies it to the bot state, delivers wait list DMs and
//! updates the bot presence. A tick that starts while the previous one is still waiting
//! on the map is skipped.

use std::sync::Arc;

use chrono::Utc;
use serenity::all::{CreateMessage, UserId};
use tokio::sync::Mutex;
use tokio_cron_scheduler::Job;

use crate::{
    config::EmojiConfig,
    error::AppError,
    model::{avatar::AvatarBook, cap_name},
    service::{format::escape_markdown, poll::PollService},
    state::AppState,
};

/// Every 2 seconds.
pub const POLL_SCHEDULE: &str = "*/2 * * * * *";

pub fn job(state: AppState) -> Result<Job, AppError> {
    // Locked for the duration of a poll.
    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(POLL_SCHEDULE, move |_uuid, _lock| {
        let state = state.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_running) = running.try_lock() else {
                tracing::debug!("Previous status poll still running, skipping tick");
                return;
            };
            poll(&state).await;
        })
    })?;

    Ok(job)
}

/// Presence text: `онлайн [n/max]`, or `онлайн [0/0]` when the map is unreachable.
pub fn presence_text(online: Option<usize>, max_online: usize) -> String {
    match online {
        Some(count) => format!("онлайн [{count}/{max_online}]"),
        None => "онлайн [0/0]".to_string(),
    }
}

/// DM sent to an observer when a watched character logs in.
pub fn wait_notice(avatars: &AvatarBook, emoji: &EmojiConfig, name: &str) -> String {
    let name = cap_name(name);
    format!(
        "Персонаж **{}** только что зашел на сервер.",
        avatars.decorate(&name, &escape_markdown(&name), &emoji.unknown_avatar)
    )
}

async fn poll(state: &AppState) {
    let config = &state.config;
    let now = Utc::now();
    let fetched = state.status_client.fetch().await;

    let (online, messages) = {
        let mut bot = state.bot.write().await;
        let service = PollService::new(&state.store);

        let (online, outcome) = match fetched {
            Ok(status) => {
                let outcome = service.apply(&mut bot, &status.players, now);
                (Some(outcome.update.online_count), Some(outcome))
            }
            Err(e) => {
                tracing::debug!("Map status unavailable: {}", e);
                let outcome = service.apply_failure(&mut bot, config.fetch_failure_policy, now);
                (None, outcome)
            }
        };

        let messages: Vec<(u64, String)> = outcome
            .map(|outcome| outcome.notifications)
            .unwrap_or_default()
            .into_iter()
            .map(|n| (n.observer, wait_notice(&bot.avatars, &config.emoji, &n.name)))
            .collect();
        (online, messages)
    };

    let ctx = state.gateway.read().await.ctx().cloned();
    if let Some(ctx) = ctx {
        for (observer, text) in messages {
            let builder = CreateMessage::new().content(text);
            if let Err(e) = UserId::new(observer).direct_message(&ctx, builder).await {
                tracing::debug!("Failed to notify {} about an arrival: {}", observer, e);
            }
        }
    }

    state
        .gateway
        .write()
        .await
        .set_presence(presence_text(online, config.max_online));
}
