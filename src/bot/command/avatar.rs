use crate::{bot::command::CommandContext, error::AppError, service::avatar::AvatarService};

/// `avatar [name] [emoji]`: clears all, clears one, or sets one.
pub async fn avatar(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let change = {
        let mut bot = cx.app.bot.write().await;
        AvatarService::new(&cx.app.store).update(
            &mut bot.avatars,
            cx.args.value(0),
            cx.args.value(1),
        )?
    };
    cx.notify(change.message()).await;
    Ok(())
}

pub async fn toggle_display(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let change = {
        let mut bot = cx.app.bot.write().await;
        AvatarService::new(&cx.app.store).toggle_display(&mut bot.avatars)?
    };
    cx.notify(change.message()).await;
    Ok(())
}
