use chrono::Utc;

use crate::{
    bot::{command::CommandContext, presenter::present},
    data::will_list::WillListRepository,
    error::AppError,
    service::listing,
};

const REMOVE_KEYWORD: &str = "remove";

/// `will` shows today's list; `will <name> [comment]` adds; `will <name> remove` removes.
pub async fn will(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let now = Utc::now();
    let repository = WillListRepository::new(&cx.app.store);
    let mut bot = cx.app.bot.write().await;

    if bot.will_list.roll_over(now.date_naive()) {
        repository.save(bot.will_list.entries())?;
    }

    let Some(name) = cx.args.value(0) else {
        let pages = listing::will_pages(&bot, &cx.app.config.emoji, now);
        drop(bot);
        return present(&cx.reply, &cx.app.presenters, &cx.app.config, pages, false).await;
    };

    let notice = if cx.args.value(1) == Some(REMOVE_KEYWORD) {
        bot.will_list.remove(name);
        "Персонаж успешно удален из списка \"**Сегодня будут**\"."
    } else {
        bot.will_list.add(name, &cx.args.rest_after_first().clean);
        "Персонаж успешно добавлен в список \"**Сегодня будут**\"."
    };
    repository.save(bot.will_list.entries())?;
    drop(bot);

    cx.notify(notice).await;
    Ok(())
}
