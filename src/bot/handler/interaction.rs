use serenity::all::{Context, Interaction};

use crate::{
    bot::{
        command::{
            self,
            router::{self, CommandKind, DM_PERMISSIONS},
            slash, CommandContext,
        },
        reply::Reply,
    },
    state::AppState,
};

/// Runs slash commands; other interaction kinds are ignored.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };
    let Some(descriptor) = router::find_slash_command(&interaction.data.name) else {
        tracing::debug!("Unknown slash command {}", interaction.data.name);
        return;
    };

    let bot_permissions = match interaction.guild_id {
        Some(_) => interaction.app_permissions.unwrap_or(DM_PERMISSIONS),
        None => DM_PERMISSIONS,
    };
    let author_name = interaction
        .member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .unwrap_or_else(|| interaction.user.name.clone());

    let cx = CommandContext {
        app: state,
        reply: Reply::to_interaction(&ctx, &interaction)
            .ephemeral(descriptor.kind == CommandKind::Ping),
        author_id: interaction.user.id,
        author_name,
        bot_permissions,
        args: slash::arguments(&interaction),
    };
    command::run(descriptor, cx).await;
}
