//! Renders the bot's lists into pages.
//!
//! Each list line is built from the raw roster name: capped, markdown-escaped, then
//! prefixed with the avatar emoji when avatar display is on and with a status emoji
//! where the list shows presence.

use chrono::{DateTime, Utc};

use crate::{
    config::EmojiConfig,
    model::{cap_name, roster::PresenceStatus, status::MapStatus},
    service::{
        format::{escape_markdown, offline_time},
        presenter::{PageSet, DEFAULT_PAGE_SIZE, WILL_LIST_PAGE_SIZE},
    },
    state::BotState,
};

/// Shown instead of an empty list.
pub const CRICKETS: &str = r"_\*звук сверчков\*_";

/// Spacer placed before the comment line of a will-list entry.
const COMMENT_INDENT: &str = "\u{2003}";

pub fn status_emoji(emoji: &EmojiConfig, status: PresenceStatus) -> &str {
    match status {
        PresenceStatus::Online => &emoji.online,
        PresenceStatus::Afk => &emoji.afk,
        PresenceStatus::Offline => &emoji.offline,
    }
}

/// Name as shown in lists: capped, escaped and, when avatars are on, prefixed with one.
pub fn display_name(state: &BotState, emoji: &EmojiConfig, name: &str) -> String {
    let name = cap_name(name);
    let escaped = escape_markdown(&name);
    if state.avatars.apply {
        state.avatars.decorate(&name, &escaped, &emoji.unknown_avatar)
    } else {
        escaped
    }
}

/// Weather line of the online list.
pub fn weather_line(status: &MapStatus) -> String {
    let weather = match (status.has_storm, status.is_thundering) {
        (Some(true), Some(true)) => "Осадки с грозой ⛈",
        (Some(true), _) => "Осадки 🌧",
        _ => "Ясно ☀",
    };
    format!("🌍 `Погода:` {weather}")
}

/// Online list from a fresh map status.
///
/// # Arguments
/// - `state` - Supplies the record, avatars and AFK state
/// - `status` - Map status fetched for this command
/// - `emoji` - Status and avatar emoji
/// - `max_online` - Nominal server capacity shown in the title
pub fn online_pages(
    state: &BotState,
    status: &MapStatus,
    emoji: &EmojiConfig,
    max_online: usize,
) -> PageSet {
    let mut names = status.player_names();
    names.sort();
    names.dedup();
    let count = names.len();

    let title = format!("Онлайн [{count}/{}]", count.max(max_online));
    let mut header = format!(
        "🏆 `Рекорд:` {}\n{}",
        state.online_record.value(),
        weather_line(status)
    );
    if count == 0 {
        header.push_str("\n\n");
        header.push_str(CRICKETS);
    }

    let lines: Vec<String> = names
        .iter()
        .map(|name| {
            format!(
                "{} {}",
                status_emoji(emoji, state.roster.status_of(name)),
                display_name(state, emoji, name)
            )
        })
        .collect();

    PageSet::render(&title, &header, &lines, DEFAULT_PAGE_SIZE)
}

/// Names that have an avatar.
pub fn avatar_pages(state: &BotState, emoji: &EmojiConfig) -> PageSet {
    let names = state.avatars.names();
    let lines: Vec<String> = names
        .iter()
        .map(|name| display_name(state, emoji, name))
        .collect();

    PageSet::render(
        &format!("Зарегистрировано: {}", names.len()),
        "",
        &lines,
        DEFAULT_PAGE_SIZE,
    )
}

/// Characters expected today, with presence, today's last visit and comment.
pub fn will_pages(state: &BotState, emoji: &EmojiConfig, now: DateTime<Utc>) -> PageSet {
    let today = now.date_naive();
    let lines: Vec<String> = state
        .will_list
        .list()
        .map(|(name, comment)| {
            let presence = state.roster.status_of(name);
            let mut line = format!(
                "{} {}",
                status_emoji(emoji, presence),
                display_name(state, emoji, name)
            );

            let seen_today = state
                .user_info
                .get(name)
                .and_then(|info| info.last_seen_at)
                .filter(|seen| seen.date_naive() == today);
            if presence == PresenceStatus::Offline {
                if let Some(seen) = seen_today {
                    line.push_str(&format!(" ▪ `{}`", offline_time(Some(seen), now)));
                }
            }
            if !comment.is_empty() {
                line.push_str(&format!("\n{COMMENT_INDENT} 📎 _{comment}_"));
            }
            line
        })
        .collect();

    let header = if lines.is_empty() { CRICKETS } else { "" };
    PageSet::render("Сегодня будут:", header, &lines, WILL_LIST_PAGE_SIZE)
}

/// Names an observer waits for.
pub fn wait_pages(state: &BotState, emoji: &EmojiConfig, observer: u64, observer_name: &str) -> PageSet {
    let lines: Vec<String> = state
        .wait_list
        .watched_by(observer)
        .iter()
        .map(|name| display_name(state, emoji, name))
        .collect();

    let header = if lines.is_empty() { CRICKETS } else { "" };
    PageSet::render(
        &format!("Список ожидания {}:", escape_markdown(observer_name)),
        header,
        &lines,
        DEFAULT_PAGE_SIZE,
    )
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
    use test_utils::factory::status::{map_status, map_status_with_weather, player};

    fn emoji() -> EmojiConfig {
        EmojiConfig {
            online: "🟢".to_string(),
            afk: "🌙".to_string(),
            offline: "⚫".to_string(),
            unknown_avatar: "❔".to_string(),
        }
    }

    fn state() -> BotState {
        BotState {
            roster: RosterTracker::new(TimeDelta::seconds(300)),
            online_record: OnlineRecord::new(7),
            user_info: UserInfoBook::default(),
            avatars: AvatarBook::default(),
            will_list: WillList::restore(StoredWillList::default(), Utc::now().date_naive()),
            wait_list: WaitRegistry::new(Default::default(), 10),
        }
    }

    fn status(names: &[&str]) -> MapStatus {
        let values: Vec<_> = names.iter().map(|n| player(n, 0.0, 0.0, 0.0)).collect();
        serde_json::from_value(map_status(&values)).unwrap()
    }

    #[test]
    fn online_list_is_sorted_with_status_and_header() {
        let mut state = state();
        let fetched = status(&["bob_", "Alice"]);
        state.roster.apply(&fetched.players, Utc::now());

        let pages = online_pages(&state, &fetched, &emoji(), 20);
        let page = pages.first().unwrap();

        assert_eq!(page.title, "Онлайн [2/20]");
        assert_eq!(
            page.description,
            "🏆 `Рекорд:` 7\n🌍 `Погода:` Ясно ☀\n\n🟢 Alice\n🟢 bob\\_"
        );
    }

    #[test]
    fn empty_online_list_shows_crickets() {
        let pages = online_pages(&state(), &status(&[]), &emoji(), 20);

        assert!(pages.first().unwrap().description.ends_with(CRICKETS));
    }

    #[test]
    fn title_capacity_grows_past_max_online() {
        let names: Vec<String> = (0..3).map(|i| format!("p{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let pages = online_pages(&state(), &status(&refs), &emoji(), 2);

        assert_eq!(pages.first().unwrap().title, "Онлайн [3/3]");
    }

    #[test]
    fn weather_reflects_storm_flags() {
        let stormy: MapStatus =
            serde_json::from_value(map_status_with_weather(&[], true, true)).unwrap();
        let rainy: MapStatus =
            serde_json::from_value(map_status_with_weather(&[], true, false)).unwrap();

        assert_eq!(weather_line(&stormy), "🌍 `Погода:` Осадки с грозой ⛈");
        assert_eq!(weather_line(&rainy), "🌍 `Погода:` Осадки 🌧");
        assert_eq!(weather_line(&MapStatus::default()), "🌍 `Погода:` Ясно ☀");
    }

    #[test]
    fn avatars_prefix_names_only_when_enabled() {
        let mut state = state();
        state.avatars.set("Steve", "<:steve:1>");

        assert_eq!(display_name(&state, &emoji(), "Steve"), "Steve");

        state.avatars.apply = true;
        assert_eq!(display_name(&state, &emoji(), "Steve"), "<:steve:1> Steve");
        assert_eq!(display_name(&state, &emoji(), "Alex"), "❔ Alex");
    }

    #[test]
    fn avatar_list_counts_registered_names() {
        let mut state = state();
        state.avatars.set("Steve", "a");
        state.avatars.set("Alex", "b");

        let pages = avatar_pages(&state, &emoji());
        let page = pages.first().unwrap();

        assert_eq!(page.title, "Зарегистрировано: 2");
        assert_eq!(page.description, "Alex\nSteve");
    }

    #[test]
    fn will_list_shows_visit_today_and_comment() {
        let mut state = state();
        let now = Utc::now();
        state.will_list.add("Steve", "после работы");
        state.will_list.add("Alex", "");
        state.user_info.entry("Steve").unwrap().last_seen_at = Some(now);

        let pages = will_pages(&state, &emoji(), now);
        let description = &pages.first().unwrap().description;

        assert_eq!(
            description,
            &format!(
                "⚫ Alex\n⚫ Steve ▪ `заходил(а) только что`\n{COMMENT_INDENT} 📎 _после работы_"
            )
        );
    }

    #[test]
    fn will_list_pages_hold_ten_entries() {
        let mut state = state();
        for i in 0..11 {
            state.will_list.add(&format!("p{i:02}"), "");
        }

        assert_eq!(will_pages(&state, &emoji(), Utc::now()).page_count(), 2);
    }

    #[test]
    fn wait_list_is_personal() {
        let mut state = state();
        state.wait_list.watch(1, "Steve").unwrap();
        state.wait_list.watch(2, "Alex").unwrap();

        let pages = wait_pages(&state, &emoji(), 1, "some_user");
        let page = pages.first().unwrap();

        assert_eq!(page.title, r"Список ожидания some\_user:");
        assert_eq!(page.description, "Steve");
        assert!(wait_pages(&state, &emoji(), 3, "x")
            .first()
            .unwrap()
            .description
            .contains(CRICKETS));
    }
}
