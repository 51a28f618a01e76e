use serenity::all::{Context, Guild, UnavailableGuild};

/// Handles guild availability and joins.
pub async fn handle_guild_create(_ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new.unwrap_or(false) {
        tracing::info!("Joined guild {} ({})", guild.name, guild.id);
    } else {
        tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
    }
}

/// Handles leaving a guild or a guild outage.
pub async fn handle_guild_delete(_ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
    let name = full.map(|guild| guild.name).unwrap_or_default();

    if incomplete.unavailable {
        tracing::warn!("Guild {} ({}) became unavailable", name, incomplete.id);
    } else {
        tracing::info!("Left guild {} ({})", name, incomplete.id);
    }
}
