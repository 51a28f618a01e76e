//! Ready event handler for bot initialization.
//!
//! Fired after every successful gateway handshake, including reconnects. Each time the new
//! context replaces the one background jobs use and slash commands are re-registered; the
//! scheduler is started only once per process.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{ActivityData, Context, Ready};

use crate::{bot::command::slash, scheduler, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `scheduler_started` - Guards against starting the scheduler on reconnects
/// - `ctx` - Discord context for presence and command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &AppState,
    scheduler_started: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("загрузку...")));
    state.gateway.write().await.connect(ctx.clone());

    match slash::register(&ctx, state.config.test_guild_id).await {
        Ok(commands) => {
            tracing::info!("Registered {} slash commands", commands.len());
            *state.slash_commands.write().await = commands;
        }
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    if scheduler_started.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = scheduler::start_scheduler(state.clone()).await {
        tracing::error!("Failed to start scheduler: {}", e);
        scheduler_started.store(false, Ordering::SeqCst);
    }
}
