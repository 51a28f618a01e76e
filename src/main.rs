mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    service::status::StatusClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let status_client = StatusClient::new(http_client, &config);
    let (store, bot_state) = startup::load_state(&config)?;

    let state = AppState::new(config, store, status_client, bot_state);

    tracing::info!("Starting Honeymoon bot");

    let client = init_bot(state.clone()).await?;
    let shard_manager = client.shard_manager.clone();

    let bot_task = tokio::spawn(async move {
        if let Err(e) = start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    wait_for_shutdown(&state.shutdown).await?;

    tracing::info!("Shutting down");
    shard_manager.shutdown_all().await;
    if let Err(e) = bot_task.await {
        tracing::error!("Discord bot task failed: {}", e);
    }

    Ok(())
}

/// Resolves on Ctrl-C, SIGTERM or a `reset` command.
async fn wait_for_shutdown(reset: &Notify) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
            _ = reset.notified() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = reset.notified() => {}
    }

    Ok(())
}
