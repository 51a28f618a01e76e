use std::{path::PathBuf, str::FromStr, time::Duration};

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SITE_URL: &str = "https://honeymoon.rip";
const DEFAULT_GUILD_ICON_URL: &str =
    "https://cdn.discordapp.com/icons/375333729897414656/a024824d98cbeaff25b66eba15b7b6ad.png";
const DEFAULT_SKIN_URL: &str = "https://my.honeymoon.rip/skins/";

/// What the status poll does with the roster when the map cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchFailurePolicy {
    /// Leave roster, user info and wait list untouched until the next tick.
    #[default]
    Skip,
    /// Treat the tick as "nobody is online", marking every tracked player as departed.
    ClearRoster,
}

impl FromStr for FetchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "clear" | "clear_roster" => Ok(Self::ClearRoster),
            other => Err(format!("expected 'skip' or 'clear', got '{other}'")),
        }
    }
}

/// Status emojis and decorative tokens rendered in lists.
#[derive(Debug, Clone)]
pub struct EmojiConfig {
    pub online: String,
    pub afk: String,
    pub offline: String,
    pub unknown_avatar: String,
}

pub struct Config {
    pub discord_bot_token: String,
    pub owner_id: u64,
    pub test_guild_id: Option<u64>,
    pub prefix: String,
    pub maintenance: bool,

    pub status_url: String,
    pub status_use_timestamp: bool,
    pub fetch_failure_policy: FetchFailurePolicy,

    pub data_dir: PathBuf,

    pub max_online: usize,
    pub afk_threshold: Duration,
    pub max_users_to_wait: usize,
    pub notification_lifetime: Duration,
    pub presenter_lifetime: Duration,

    pub site_url: String,
    pub skin_url: String,
    pub invite_link: Option<String>,
    pub guild_icon_url: String,
    pub emoji: EmojiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let status_url = required("STATUS_URL")?;
        Url::parse(&status_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "STATUS_URL".to_string(),
            value: status_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            owner_id: parse("OWNER_ID", required("OWNER_ID")?)?,
            test_guild_id: optional("TEST_GUILD_ID")
                .map(|v| parse("TEST_GUILD_ID", v))
                .transpose()?,
            prefix: optional("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            maintenance: parse_or("MAINTENANCE", false)?,

            status_url,
            status_use_timestamp: parse_or("STATUS_USE_TIMESTAMP", false)?,
            fetch_failure_policy: parse_or("FETCH_FAILURE_POLICY", FetchFailurePolicy::Skip)?,

            data_dir: optional("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),

            max_online: parse_or("MAX_ONLINE", 20)?,
            afk_threshold: Duration::from_secs(parse_or("AFK_THRESHOLD_SECS", 300)?),
            max_users_to_wait: parse_or("MAX_USERS_TO_WAIT", 10)?,
            notification_lifetime: Duration::from_secs(parse_or(
                "NOTIFICATION_LIFETIME_SECS",
                10,
            )?),
            // 7 hours 50 minutes
            presenter_lifetime: Duration::from_secs(parse_or("PRESENTER_LIFETIME_SECS", 28_200)?),

            site_url: optional("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            skin_url: optional("SKIN_URL").unwrap_or_else(|| DEFAULT_SKIN_URL.to_string()),
            invite_link: optional("INVITE_LINK"),
            guild_icon_url: optional("GUILD_ICON_URL")
                .unwrap_or_else(|| DEFAULT_GUILD_ICON_URL.to_string()),
            emoji: EmojiConfig {
                online: optional("EMOJI_ONLINE").unwrap_or_else(|| "🟢".to_string()),
                afk: optional("EMOJI_AFK").unwrap_or_else(|| "🌙".to_string()),
                offline: optional("EMOJI_OFFLINE").unwrap_or_else(|| "⚫".to_string()),
                unknown_avatar: optional("EMOJI_UNKNOWN_AVATAR")
                    .unwrap_or_else(|| "<:unknown:650033177460604938>".to_string()),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(value) => parse(name, value),
        None => Ok(default),
    }
}
