use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// The caller keeps `client.shard_manager` to shut the gateway down later.
///
/// # Arguments
/// - `state` - Application state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready for [`start_bot`]
/// - `Err(AppError)` - The token was rejected while building the client
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let token = state.config.discord_bot_token.clone();
    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects the client and processes events until the shard manager shuts down.
///
/// This should be called from within a tokio::spawn task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
