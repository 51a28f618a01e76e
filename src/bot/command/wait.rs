use crate::{
    bot::{command::CommandContext, presenter::present},
    data::wait_list::WaitListRepository,
    error::{wait_list::WaitListError, AppError},
    service::listing,
};

const REMOVE_KEYWORD: &str = "remove";

/// `wait` lists the author's watched names; `wait <name>` watches; `wait <name> remove` unwatches.
pub async fn wait(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let observer = cx.author_id.get();
    let mut bot = cx.app.bot.write().await;

    let Some(name) = cx.args.value(0) else {
        let pages = listing::wait_pages(&bot, &cx.app.config.emoji, observer, &cx.author_name);
        drop(bot);
        return present(&cx.reply, &cx.app.presenters, &cx.app.config, pages, false).await;
    };

    let notice = if cx.args.value(1) == Some(REMOVE_KEYWORD) {
        bot.wait_list.unwatch(observer, name);
        "Персонаж успешно удален из вашего списка ожидания."
    } else {
        match bot.wait_list.watch(observer, name) {
            Ok(_) => "Персонаж успешно добавлен в ваш список ожидания.",
            Err(WaitListError::CapacityReached { limit }) => {
                tracing::debug!("{} hit the wait list limit of {}", observer, limit);
                drop(bot);
                cx.notify("Превышен лимит количества персонажей для ожидания.").await;
                return Ok(());
            }
        }
    };
    WaitListRepository::new(&cx.app.store).save(bot.wait_list.entries())?;
    drop(bot);

    cx.notify(notice).await;
    Ok(())
}
