use serenity::all::{Context, Message, Permissions, UserId};

use crate::{
    bot::{
        command::{
            self,
            router::{self, DM_PERMISSIONS},
            CommandContext,
        },
        reply::Reply,
    },
    state::AppState,
};

/// Parses a chat message and runs the command it invokes, if any.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let bot_id = ctx.cache.current_user().id;
    let clean_content = message.content_safe(&ctx.cache);
    let Some(invocation) = router::parse(
        &message.content,
        &clean_content,
        &state.config.prefix,
        bot_id.get(),
    ) else {
        return;
    };

    let bot_permissions = channel_permissions(&ctx, &message, bot_id);
    let author_name = message
        .member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .unwrap_or_else(|| message.author.name.clone());

    let cx = CommandContext {
        app: state,
        reply: Reply::to_message(&ctx, &message),
        author_id: message.author.id,
        author_name,
        bot_permissions,
        args: invocation.args,
    };
    command::run(invocation.command, cx).await;
}

/// Effective permissions of the bot in the message's channel.
///
/// Direct messages get [`DM_PERMISSIONS`]. When the guild, channel or bot member is not
/// cached, the same set is assumed and Discord has the final word on the request.
fn channel_permissions(ctx: &Context, message: &Message, bot_id: UserId) -> Permissions {
    let Some(guild_id) = message.guild_id else {
        return DM_PERMISSIONS;
    };
    let Some(guild) = ctx.cache.guild(guild_id) else {
        tracing::debug!("Guild {} not cached, assuming default permissions", guild_id);
        return DM_PERMISSIONS;
    };

    let channel = guild
        .channels
        .get(&message.channel_id)
        .or_else(|| guild.threads.iter().find(|thread| thread.id == message.channel_id));
    match (channel, guild.members.get(&bot_id)) {
        (Some(channel), Some(member)) => guild.user_permissions_in(channel, member),
        _ => {
            tracing::debug!(
                "Channel {} or bot member not cached, assuming default permissions",
                message.channel_id
            );
            DM_PERMISSIONS
        }
    }
}
