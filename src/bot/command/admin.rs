//! Owner maintenance commands.

use crate::{bot::command::CommandContext, error::AppError};

/// Shuts the bot down; the process supervisor brings it back up.
pub async fn reset(cx: &CommandContext<'_>) -> Result<(), AppError> {
    tracing::info!("Shutdown requested by {}", cx.author_id);
    cx.app.shutdown.notify_one();
    Ok(())
}

/// Re-reads avatars and character info from disk, picking up manual edits.
pub async fn reload_users(cx: &CommandContext<'_>) -> Result<(), AppError> {
    cx.app
        .bot
        .write()
        .await
        .reload_users(&cx.app.store)?;
    tracing::info!("Reloaded avatars and character info");

    cx.notify("Файлы аватаров и информации о персонажах успешно перезагружены.")
        .await;
    Ok(())
}
