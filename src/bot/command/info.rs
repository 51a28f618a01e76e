//! Character info commands: `info`, `setinfo`, `setart`, `infolockswitch`, `deleteinfo`.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};
use url::Url;

use crate::{
    bot::{command::CommandContext, presenter::LIST_COLOUR},
    config::{Config, EmojiConfig},
    error::AppError,
    model::{avatar::emoji_image_url, cap_name, roster::PresenceStatus},
    service::{
        format::{escape_markdown, offline_time},
        listing::status_emoji,
        user_info::UserInfoService,
    },
    state::BotState,
};

/// Content of the `info` embed.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCard {
    pub title: String,
    /// Skin image of the character.
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub footer: String,
    pub footer_icon: Option<String>,
}

impl CharacterCard {
    pub fn build(
        state: &BotState,
        skin_url: &str,
        emoji: &EmojiConfig,
        name: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let name = cap_name(name);
        let info = state.user_info.get(&name);
        let presence = state.roster.status_of(&name);

        let footer = match presence {
            PresenceStatus::Online => "в сети".to_string(),
            PresenceStatus::Afk => "AFK".to_string(),
            PresenceStatus::Offline => offline_time(info.and_then(|i| i.last_seen_at), now),
        };

        let avatar = state
            .avatars
            .get(&name)
            .unwrap_or(emoji.unknown_avatar.as_str());

        Self {
            title: format!("📝 Информация: {}", escape_markdown(&name)),
            url: skin_link(skin_url, &name),
            thumbnail: emoji_image_url(avatar),
            description: state.user_info.description_of(&name).to_string(),
            image: info
                .and_then(|i| i.art.clone())
                .filter(|art| !art.trim().is_empty()),
            footer,
            footer_icon: emoji_image_url(status_emoji(emoji, presence)),
        }
    }

    fn into_embed(self, config: &Config) -> CreateEmbed {
        let mut footer = CreateEmbedFooter::new(self.footer);
        if let Some(icon) = self.footer_icon {
            footer = footer.icon_url(icon);
        }

        let mut embed = CreateEmbed::new()
            .colour(LIST_COLOUR)
            .author(
                CreateEmbedAuthor::new("Honeymoon")
                    .url(&config.site_url)
                    .icon_url(&config.guild_icon_url),
            )
            .title(self.title)
            .description(self.description)
            .footer(footer);
        if let Some(url) = self.url {
            embed = embed.url(url);
        }
        if let Some(thumbnail) = self.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }
        if let Some(image) = self.image {
            embed = embed.image(image);
        }
        embed
    }
}

/// `{skin_url}{name}.png` with the name percent-encoded as one path segment.
pub fn skin_link(skin_url: &str, name: &str) -> Option<String> {
    let mut url = Url::parse(skin_url).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(&format!("{name}.png"));
    Some(url.to_string())
}

pub async fn info(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(name) = cx.args.value(0) else {
        return Ok(());
    };
    let config = &cx.app.config;

    let card = CharacterCard::build(
        &*cx.app.bot.read().await,
        &config.skin_url,
        &config.emoji,
        name,
        Utc::now(),
    );
    cx.reply.send(card.into_embed(config)).await?;
    Ok(())
}

pub async fn set_info(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(name) = cx.args.value(0) else {
        return Ok(());
    };
    let description = cx.args.rest_after_first().clean;
    if description.is_empty() {
        return Ok(());
    }

    let edit = {
        let mut bot = cx.app.bot.write().await;
        UserInfoService::new(&cx.app.store).set_description(
            &mut bot.user_info,
            name,
            &description,
            cx.is_owner(),
        )?
    };
    cx.notify(edit.message()).await;
    Ok(())
}

pub async fn set_art(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let Some(name) = cx.args.value(0) else {
        return Ok(());
    };
    // Links are taken whole, past the argument length cap.
    let art = cx.args.rest_after_first().value;
    if art.is_empty() {
        return Ok(());
    }

    let edit = {
        let mut bot = cx.app.bot.write().await;
        UserInfoService::new(&cx.app.store).set_art(
            &mut bot.user_info,
            name,
            &art,
            cx.is_owner(),
        )?
    };
    cx.notify(edit.message()).await;
    Ok(())
}

pub async fn toggle_lock(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let edit = {
        let mut bot = cx.app.bot.write().await;
        UserInfoService::new(&cx.app.store).toggle_lock(&mut bot.user_info, cx.args.value(0))?
    };
    cx.notify(edit.message()).await;
    Ok(())
}

pub async fn delete(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let edit = {
        let mut bot = cx.app.bot.write().await;
        UserInfoService::new(&cx.app.store).delete(&mut bot.user_info, cx.args.value(0))?
    };
    cx.notify(edit.message()).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::will_list::StoredWillList,
        model::{avatar::AvatarBook, online_record::OnlineRecord, user_info::UserInfoBook},
        service::{roster::RosterTracker, wait_list::WaitRegistry, will_list::WillList},
    };
    use chrono::TimeDelta;

    const SKINS: &str = "https://my.honeymoon.rip/skins/";

    fn emoji() -> EmojiConfig {
        EmojiConfig {
            online: "<:online:655127019889229848>".to_string(),
            afk: "🌙".to_string(),
            offline: "⚫".to_string(),
            unknown_avatar: "<:unknown:650033177460604938>".to_string(),
        }
    }

    fn state() -> BotState {
        BotState {
            roster: RosterTracker::new(TimeDelta::seconds(300)),
            online_record: OnlineRecord::new(0),
            user_info: UserInfoBook {
                default_description: "Пусто.".to_string(),
                ..Default::default()
            },
            avatars: AvatarBook::default(),
            will_list: WillList::restore(StoredWillList::default(), Utc::now().date_naive()),
            wait_list: WaitRegistry::new(Default::default(), 10),
        }
    }

    #[test]
    fn skin_link_encodes_the_name() {
        assert_eq!(
            skin_link(SKINS, "Steve B").as_deref(),
            Some("https://my.honeymoon.rip/skins/Steve%20B.png")
        );
        assert_eq!(skin_link("not a url", "Steve"), None);
    }

    #[test]
    fn unknown_character_gets_defaults() {
        let now = Utc::now();

        let card = CharacterCard::build(&state(), SKINS, &emoji(), "Steve_", now);

        assert_eq!(card.title, r"📝 Информация: Steve\_");
        assert_eq!(card.description, "Пусто.");
        assert_eq!(
            card.thumbnail.as_deref(),
            Some("https://cdn.discordapp.com/emojis/650033177460604938.png")
        );
        assert_eq!(card.image, None);
        assert_eq!(card.footer, "не в сети");
        assert_eq!(card.footer_icon, None);
    }

    #[test]
    fn online_character_shows_avatar_art_and_status() {
        let mut state = state();
        let now = Utc::now();
        state.avatars.set("Steve", "<a:steve:77>");
        state.user_info.entry("Steve").unwrap().art = Some("https://art.example/steve.png".to_string());
        state.user_info.entry("Steve").unwrap().description = Some("Строитель".to_string());
        let player = crate::model::status::StatusPlayer {
            name: "Steve".to_string(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        state.roster.apply(&[player], now);

        let card = CharacterCard::build(&state, SKINS, &emoji(), "Steve", now);

        assert_eq!(card.description, "Строитель");
        assert_eq!(
            card.thumbnail.as_deref(),
            Some("https://cdn.discordapp.com/emojis/77.gif")
        );
        assert_eq!(card.image.as_deref(), Some("https://art.example/steve.png"));
        assert_eq!(card.footer, "в сети");
        assert_eq!(
            card.footer_icon.as_deref(),
            Some("https://cdn.discordapp.com/emojis/655127019889229848.png")
        );
    }
}
