//! Slash command registration and option extraction.

use std::collections::HashMap;

use serenity::all::{
    Command, CommandDataOptionValue, CommandInteraction, CommandOptionType, Context,
    CreateCommand, CreateCommandOption, GuildId,
};

use crate::{
    bot::command::router::{
        clean_option_value, Argument, Arguments, CommandKind, COMMANDS, MAX_ARGUMENT_LENGTH,
    },
    error::AppError,
    service::format::truncate_chars,
};

/// Builders for every command flagged as a slash command.
pub fn definitions() -> Vec<CreateCommand> {
    COMMANDS
        .iter()
        .filter(|command| command.slash)
        .map(|command| {
            let builder = CreateCommand::new(command.name).description(command.description);
            match command.kind {
                CommandKind::Info => builder.add_option(
                    CreateCommandOption::new(CommandOptionType::String, "name", "Имя персонажа")
                        .required(true),
                ),
                _ => builder,
            }
        })
        .collect()
}

/// Registers the slash commands, replacing whatever was registered before.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `test_guild` - Register to this guild only (instant update) instead of globally
///
/// # Returns
/// - `Ok(HashMap)` - Registered command ids by name
/// - `Err(AppError)` - Discord rejected the registration
pub async fn register(
    ctx: &Context,
    test_guild: Option<u64>,
) -> Result<HashMap<String, u64>, AppError> {
    let commands = match test_guild {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, definitions())
                .await?
        }
        None => Command::set_global_commands(&ctx.http, definitions()).await?,
    };

    Ok(commands
        .into_iter()
        .map(|command| (command.name, command.id.get()))
        .collect())
}

/// String options of an interaction, with resolved mentions replaced by names.
pub fn arguments(interaction: &CommandInteraction) -> Arguments {
    let resolved = &interaction.data.resolved;

    let users: Vec<(u64, String)> = resolved
        .users
        .iter()
        .map(|(id, user)| {
            let name = resolved
                .members
                .get(id)
                .and_then(|member| member.nick.clone())
                .unwrap_or_else(|| user.name.clone());
            (id.get(), name)
        })
        .collect();
    let roles: Vec<(u64, String)> = resolved
        .roles
        .iter()
        .map(|(id, role)| (id.get(), role.name.clone()))
        .collect();
    let channels: Vec<(u64, String)> = resolved
        .channels
        .iter()
        .map(|(id, channel)| (id.get(), channel.name.clone().unwrap_or_default()))
        .collect();

    let options = interaction
        .data
        .options
        .iter()
        .filter_map(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some(Argument {
                value: truncate_chars(value.trim(), MAX_ARGUMENT_LENGTH),
                clean: truncate_chars(
                    &clean_option_value(value, &users, &roles, &channels),
                    MAX_ARGUMENT_LENGTH,
                ),
            }),
            _ => None,
        })
        .collect();

    Arguments::from_options(options)
}
