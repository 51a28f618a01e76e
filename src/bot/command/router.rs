//! Chat command parsing.
//!
//! Turns a message into an [`Invocation`]: prefix detection (configured literal or a
//! leading bot mention), command lookup through the alias table, and argument
//! tokenizing. Nothing here talks to Discord, so every rule is unit tested below.

use serenity::all::Permissions;

use crate::service::format::{shrink_spaces, truncate_chars};

/// Longest value kept for a single argument.
pub const MAX_ARGUMENT_LENGTH: usize = 100;

const BASIC: Permissions = Permissions::VIEW_CHANNEL.union(Permissions::SEND_MESSAGES);
const EMBED: Permissions = BASIC.union(Permissions::EMBED_LINKS);
const PAGED: Permissions = EMBED
    .union(Permissions::ADD_REACTIONS)
    .union(Permissions::READ_MESSAGE_HISTORY);

/// Permissions assumed for the bot in direct messages, where no channel overwrites exist.
pub const DM_PERMISSIONS: Permissions = PAGED
    .union(Permissions::ATTACH_FILES)
    .union(Permissions::USE_EXTERNAL_EMOJIS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Ping,
    Online,
    List,
    Info,
    SetInfo,
    SetArt,
    Avatar,
    AvatarSwitch,
    InfoLockSwitch,
    DeleteInfo,
    Will,
    Wait,
    Reset,
    ReUsers,
}

/// Static description of a command.
#[derive(Debug)]
pub struct CommandDescriptor {
    pub kind: CommandKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Permissions the bot needs in the channel to run the command.
    pub permissions: Permissions,
    pub owner_only: bool,
    /// Also registered as a slash command.
    pub slash: bool,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        kind: CommandKind::Help,
        name: "help",
        aliases: &["h"],
        permissions: EMBED,
        owner_only: false,
        slash: true,
        description: "Показать список команд",
    },
    CommandDescriptor {
        kind: CommandKind::Ping,
        name: "ping",
        aliases: &[],
        permissions: BASIC,
        owner_only: false,
        slash: true,
        description: "Узнать задержку Discord API",
    },
    CommandDescriptor {
        kind: CommandKind::Online,
        name: "online",
        aliases: &["o"],
        permissions: PAGED,
        owner_only: false,
        slash: true,
        description: "Отобразить онлайн на сервере",
    },
    CommandDescriptor {
        kind: CommandKind::List,
        name: "list",
        aliases: &["l"],
        permissions: PAGED,
        owner_only: false,
        slash: true,
        description: "Вывести список пользователей с персональным аватаром",
    },
    CommandDescriptor {
        kind: CommandKind::Info,
        name: "info",
        aliases: &["i"],
        permissions: EMBED,
        owner_only: false,
        slash: true,
        description: "Отобразить информацию о персонаже",
    },
    CommandDescriptor {
        kind: CommandKind::SetInfo,
        name: "setinfo",
        aliases: &[],
        permissions: BASIC,
        owner_only: false,
        slash: false,
        description: "Добавить/изменить описание персонажа",
    },
    CommandDescriptor {
        kind: CommandKind::SetArt,
        name: "setart",
        aliases: &[],
        permissions: BASIC,
        owner_only: false,
        slash: false,
        description: "Добавить/изменить ссылку на арт персонажа",
    },
    CommandDescriptor {
        kind: CommandKind::Avatar,
        name: "avatar",
        aliases: &[],
        permissions: BASIC,
        owner_only: true,
        slash: false,
        description: "Изменить аватар персонажа",
    },
    CommandDescriptor {
        kind: CommandKind::AvatarSwitch,
        name: "avatarswitch",
        aliases: &[],
        permissions: BASIC,
        owner_only: true,
        slash: false,
        description: "Переключить отображение аватаров",
    },
    CommandDescriptor {
        kind: CommandKind::InfoLockSwitch,
        name: "infolockswitch",
        aliases: &[],
        permissions: BASIC,
        owner_only: true,
        slash: false,
        description: "Переключить блокировку изменения информации",
    },
    CommandDescriptor {
        kind: CommandKind::DeleteInfo,
        name: "deleteinfo",
        aliases: &[],
        permissions: BASIC,
        owner_only: true,
        slash: false,
        description: "Удалить информацию о персонажах",
    },
    CommandDescriptor {
        kind: CommandKind::Will,
        name: "will",
        aliases: &[],
        permissions: PAGED,
        owner_only: false,
        slash: false,
        description: "Список персонажей, собирающихся зайти сегодня",
    },
    CommandDescriptor {
        kind: CommandKind::Wait,
        name: "wait",
        aliases: &[],
        permissions: PAGED,
        owner_only: false,
        slash: false,
        description: "Список ожидания персонажей",
    },
    CommandDescriptor {
        kind: CommandKind::Reset,
        name: "reset",
        aliases: &["re"],
        permissions: Permissions::empty(),
        owner_only: true,
        slash: false,
        description: "Перезапустить бота",
    },
    CommandDescriptor {
        kind: CommandKind::ReUsers,
        name: "reusers",
        aliases: &[],
        permissions: BASIC,
        owner_only: true,
        slash: false,
        description: "Перечитать файлы аватаров и информации",
    },
];

/// Resolves a command name or alias, case-insensitively.
pub fn find_command(token: &str) -> Option<&'static CommandDescriptor> {
    let token = token.to_lowercase();
    COMMANDS
        .iter()
        .find(|command| command.name == token || command.aliases.contains(&token.as_str()))
}

/// Looks a slash command up by its registered name.
pub fn find_slash_command(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS
        .iter()
        .find(|command| command.slash && command.name == name)
}

/// One argument as typed, and as shown with mentions already resolved to names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    pub value: String,
    pub clean: String,
}

/// Arguments of an invocation.
///
/// Positional arguments are 0-based; [`Arguments::all`] holds the whole argument text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    all: Argument,
    items: Vec<Argument>,
}

impl Arguments {
    /// Tokenizes the argument text of a chat command.
    ///
    /// # Arguments
    /// - `content` - Text after the command token
    /// - `clean` - The same text with mentions replaced by names
    pub fn parse(content: &str, clean: &str) -> Self {
        let content = shrink_spaces(content).trim().to_string();
        let clean = shrink_spaces(clean).trim().to_string();

        let values = tokenize(&content);
        let cleans = tokenize(&clean);
        let count = values.len().max(cleans.len());

        let items = (0..count)
            .map(|i| Argument {
                value: values.get(i).cloned().unwrap_or_default(),
                clean: cleans.get(i).cloned().unwrap_or_default(),
            })
            .collect();

        Self {
            all: Argument {
                value: content,
                clean,
            },
            items,
        }
    }

    /// Builds arguments from slash command option values, which are already separate.
    pub fn from_options(options: Vec<Argument>) -> Self {
        let join = |pick: fn(&Argument) -> &str| {
            options
                .iter()
                .map(pick)
                .collect::<Vec<_>>()
                .join(" ")
        };
        let all = Argument {
            value: join(|a| a.value.as_str()),
            clean: join(|a| a.clean.as_str()),
        };

        Self {
            all,
            items: options,
        }
    }

    /// The whole argument text.
    pub fn all(&self) -> &Argument {
        &self.all
    }

    /// Positional argument `index` (0-based), `None` when missing or empty.
    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.items.get(index).filter(|arg| !arg.value.is_empty())
    }

    /// Raw value of positional argument `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.get(index).map(|arg| arg.value.as_str())
    }

    /// Number of non-empty positional arguments.
    pub fn len(&self) -> usize {
        self.items.iter().filter(|arg| !arg.value.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Everything after the first argument, used for free text such as descriptions.
    pub fn rest_after_first(&self) -> Argument {
        Argument {
            value: strip_first_token(&self.all.value).to_string(),
            clean: strip_first_token(&self.all.clean).to_string(),
        }
    }
}

/// A parsed chat command.
#[derive(Debug)]
pub struct Invocation {
    pub command: &'static CommandDescriptor,
    pub args: Arguments,
}

/// Returns the prefix `content` starts with: a leading `<@id>`/`<@!id>` mention of the bot
/// together with the whitespace after it, or else the configured prefix.
pub fn detect_prefix<'a>(content: &'a str, prefix: &'a str, bot_id: u64) -> &'a str {
    let id = bot_id.to_string();
    for mention in [format!("<@{id}>"), format!("<@!{id}>")] {
        if let Some(rest) = content.strip_prefix(mention.as_str()) {
            let spaces = rest.len() - rest.trim_start().len();
            return &content[..mention.len() + spaces];
        }
    }
    prefix
}

/// Parses a chat message into a command invocation.
///
/// Returns `None` for anything that is not a known command: missing prefix, content no
/// longer than the prefix, or an unknown command token.
///
/// # Arguments
/// - `content` - Message content as sent
/// - `clean_content` - Message content with mentions resolved to names
/// - `prefix` - Configured command prefix
/// - `bot_id` - Bot user id, whose mention also acts as a prefix
pub fn parse(content: &str, clean_content: &str, prefix: &str, bot_id: u64) -> Option<Invocation> {
    let prefix = detect_prefix(content, prefix, bot_id);
    if prefix.is_empty() || content.len() <= prefix.len() {
        return None;
    }
    let body = content.strip_prefix(prefix)?;

    let token = body.split_whitespace().next()?;
    if !body.starts_with(token) {
        return None;
    }
    let command = find_command(token)?;

    let rest = &body[token.len()..];
    let clean_rest = clean_after_token(clean_content, token);

    Some(Invocation {
        command,
        args: Arguments::parse(rest, &strip_mention_sigils(&shrink_spaces(clean_rest))),
    })
}

/// Defangs a slash command string option.
///
/// `@everyone`/`@here` lose their `@`; resolved user, role and channel mentions are
/// replaced by the given names; whitespace is collapsed.
///
/// # Arguments
/// - `users` - User id and display name (nickname when known)
/// - `roles` - Role id and name
/// - `channels` - Channel id and name
pub fn clean_option_value(
    value: &str,
    users: &[(u64, String)],
    roles: &[(u64, String)],
    channels: &[(u64, String)],
) -> String {
    let mut clean = value.replace("@everyone", "everyone").replace("@here", "here");
    for (id, name) in users {
        clean = clean
            .replace(&format!("<@{id}>"), name)
            .replace(&format!("<@!{id}>"), name);
    }
    for (id, name) in roles {
        clean = clean
            .replace(&format!("<@&{id}>"), name)
            .replace(&format!("<@{id}>"), name);
    }
    for (id, name) in channels {
        clean = clean.replace(&format!("<#{id}>"), name);
    }
    shrink_spaces(&clean).trim().to_string()
}

/// Splits on spaces keeping `"quoted spans"` together.
///
/// Quote pairs with nothing but spaces between them are dropped, surrounding quotes are
/// stripped, and every value is capped and trimmed.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let token = match c {
            ' ' => {
                rest = &rest[1..];
                continue;
            }
            '"' => match rest[1..].find('"') {
                Some(end) => &rest[..end + 2],
                None => "\"",
            },
            _ => {
                let end = rest.find([' ', '"']).unwrap_or(rest.len());
                &rest[..end]
            }
        };
        rest = &rest[token.len()..];

        if is_blank_quotes(token) {
            continue;
        }
        tokens.push(argument_value(token));
    }

    tokens
}

fn is_blank_quotes(token: &str) -> bool {
    token.len() >= 2
        && token.starts_with('"')
        && token.ends_with('"')
        && token[1..token.len() - 1].chars().all(|c| c == ' ')
}

fn argument_value(token: &str) -> String {
    let unquoted = match (token.find('"'), token.rfind('"')) {
        (Some(first), Some(last)) if first < last => {
            format!("{}{}{}", &token[..first], &token[first + 1..last], &token[last + 1..])
        }
        _ => token.to_string(),
    };
    truncate_chars(&unquoted, MAX_ARGUMENT_LENGTH).trim().to_string()
}

/// Drops the first argument (quoted span or bare word) and trims the remainder.
fn strip_first_token(text: &str) -> &str {
    let rest = if let Some(quoted) = text.strip_prefix('"') {
        match quoted.find('"') {
            Some(end) => &quoted[end + 1..],
            None => text,
        }
    } else {
        let end = text.find([' ', '"']).unwrap_or(text.len());
        &text[end..]
    };
    rest.trim()
}

/// Text of `clean_content` following the first occurrence of the command token.
fn clean_after_token<'a>(clean_content: &'a str, token: &str) -> &'a str {
    clean_content
        .char_indices()
        .find(|(i, _)| {
            clean_content
                .get(*i..*i + token.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(token))
        })
        .map(|(i, _)| &clean_content[i + token.len()..])
        .unwrap_or(clean_content)
}

/// Removes `@`/`#` sigils left in front of resolved mention names.
fn strip_mention_sigils(text: &str) -> String {
    const ZERO_WIDTH_SPACE: char = '\u{200B}';

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '@' || c == '#' {
            let next = chars.get(i + 1).copied();
            let after = chars.get(i + 2).copied();
            if next == Some(ZERO_WIDTH_SPACE) && after.is_some_and(|a| a != ' ') {
                i += 2;
                continue;
            }
            if next.is_some_and(|n| n != ' ') {
                i += 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}
