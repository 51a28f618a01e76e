use std::collections::BTreeSet;

use crate::{
    bot::{command::CommandContext, presenter::present},
    data::online_record::OnlineRecordRepository,
    error::AppError,
    service::listing,
};

pub const MAP_UNAVAILABLE: &str = "Не могу получить доступ к динамической карте.";

/// Shows who is online right now, fetching the map instead of reusing the last poll.
pub async fn online(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let status = match cx.app.status_client.fetch().await {
        Ok(status) => status,
        Err(e) => {
            tracing::debug!("Map unavailable for online command: {}", e);
            cx.reply.send(MAP_UNAVAILABLE).await?;
            return Ok(());
        }
    };
    let config = &cx.app.config;

    let pages = {
        let mut bot = cx.app.bot.write().await;
        let count = status
            .players
            .iter()
            .map(|player| player.name.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        if bot.online_record.observe(count) {
            OnlineRecordRepository::new(&cx.app.store).save(bot.online_record)?;
        }
        listing::online_pages(&bot, &status, &config.emoji, config.max_online)
    };

    present(&cx.reply, &cx.app.presenters, config, pages, false).await
}

/// Lists every character that has an avatar.
pub async fn list(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let config = &cx.app.config;
    let pages = listing::avatar_pages(&*cx.app.bot.read().await, &config.emoji);

    present(&cx.reply, &cx.app.presenters, config, pages, false).await
}
