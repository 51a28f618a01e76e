use std::collections::HashMap;

use serenity::all::{Colour, CreateEmbed, CreateMessage, Permissions};

use crate::{
    bot::command::CommandContext, config::Config, error::AppError, service::format::random_color,
};

const DM_FALLBACK_NOTICE: &str =
    "Сорре, не хватает прав, чтобы отправить сообщение тебе в ЛС.\nВыкладываю текст справки в данный канал:";

/// Builds the help text.
///
/// Commands registered as slash commands are shown as clickable `</name:id>` mentions,
/// the rest as `{prefix}name`.
///
/// # Arguments
/// - `prefix` - Chat command prefix
/// - `mentions` - Registered slash command ids by name
/// - `external_emojis` - Whether the bot may use emojis from other servers here
pub fn help_description(
    prefix: &str,
    mentions: &HashMap<String, u64>,
    external_emojis: bool,
) -> String {
    let command = |name: &str| match mentions.get(name) {
        Some(id) => format!("</{name}:{id}>"),
        None => format!("`{prefix}{name}`"),
    };
    let (online, list, space) = if external_emojis {
        (
            "<:online:655127019889229848>",
            "<:Discord:601094741173731338>",
            "<:space:835529413029265458>",
        )
    } else {
        ("🟢", "🦄", "")
    };

    [
        format!("{online} {} — отобразить онлайн на сервере.", command("online")),
        format!(
            "{list} {} — вывести список пользователей с персональным аватаром.",
            command("list")
        ),
        format!("🪪 {} **<name>** — отобразить информацию о персонаже.", command("info")),
        format!(
            "🪪 {} **<name> <description>** — добавить/изменить описание персонажа.",
            command("setinfo")
        ),
        format!(
            "🪪 {} **<name> <link>** — добавить/изменить ссылку на арт персонажа.",
            command("setart")
        ),
        format!(
            "📯 {} **[<name> [<comment>|remove]]** — список персонажей, собирающихся зайти сегодня.",
            command("will")
        ),
        format!(
            "⏰ {} **[<name> [remove]]** — список ожидания: бот напишет в ЛС, когда персонаж зайдет.",
            command("wait")
        ),
        format!("📢 {} — узнать задержку Discord API.", command("ping")),
        format!("❔ {} — показать данное сообщение.", command("help")),
        space.to_string(),
    ]
    .join("\n")
}

fn help_embed(config: &Config, description: String) -> CreateEmbed {
    let (r, g, b) = random_color();
    let mut embed = CreateEmbed::new()
        .colour(Colour::from_rgb(r, g, b))
        .title("Помощь")
        .description(description);
    if let Some(invite) = &config.invite_link {
        embed = embed.field(
            "Приглашение",
            format!("[Добавить Honeymoon на свой Сервер]({invite})"),
            true,
        );
    }
    embed
}

/// Sends help to the author's DMs, falling back to the channel with an apology.
///
/// Slash invocations always answer in place.
pub async fn help(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let mentions = cx.app.slash_commands.read().await.clone();
    let config = &cx.app.config;

    if cx.reply.is_interaction() {
        let external = cx.bot_permissions.contains(Permissions::USE_EXTERNAL_EMOJIS);
        let embed = help_embed(config, help_description(&config.prefix, &mentions, external));
        cx.reply.send(embed).await?;
        return Ok(());
    }

    let dm_embed = help_embed(config, help_description(&config.prefix, &mentions, true));
    let ctx = cx.reply.ctx();
    match cx
        .author_id
        .direct_message(ctx, CreateMessage::new().embed(dm_embed))
        .await
    {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::debug!("Failed to send help to {} directly: {}", cx.author_id, e);
            let external = cx.bot_permissions.contains(Permissions::USE_EXTERNAL_EMOJIS);
            let embed = help_embed(config, help_description(&config.prefix, &mentions, external));
            cx.reply.send(DM_FALLBACK_NOTICE).await?;
            cx.reply.send(embed).await?;
            Ok(())
        }
    }
}
