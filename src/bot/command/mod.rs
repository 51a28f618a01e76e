//! Chat and slash command execution.
//!
//! Both surfaces end up in [`run`] with a [`CommandContext`]: the gates (maintenance,
//! bot permissions, owner-only) are applied here, then the command's handler module takes
//! over. Handlers return `AppError` for Discord and persistence failures; those are logged
//! and the command ends without a reply.

pub mod admin;
pub mod avatar;
pub mod help;
pub mod info;
pub mod online;
pub mod ping;
pub mod router;
pub mod slash;
pub mod wait;
pub mod will;

use serenity::all::{Permissions, UserId};

use crate::{
    bot::reply::Reply,
    error::AppError,
    state::AppState,
};

use self::router::{Arguments, CommandDescriptor, CommandKind};

pub const PERMISSION_NOTICE: &str =
    "Возникли проблемы с выполнением данной команды: **не хватает прав**. 🧐";
pub const MAINTENANCE_NOTICE: &str = "Ведутся тех. работы. 🍺";

/// Everything a handler needs to run one invocation.
pub struct CommandContext<'a> {
    pub app: &'a AppState,
    pub reply: Reply<'a>,
    pub author_id: UserId,
    /// Nickname in the guild when known, otherwise the user name.
    pub author_name: String,
    /// Effective permissions of the bot in the invoking channel.
    pub bot_permissions: Permissions,
    pub args: Arguments,
}

impl CommandContext<'_> {
    pub fn is_owner(&self) -> bool {
        self.author_id.get() == self.app.config.owner_id
    }

    /// Sends a self-deleting notice with the configured lifetime.
    pub async fn notify(&self, text: &str) {
        self.reply
            .notify(text, self.app.config.notification_lifetime)
            .await;
    }
}

/// Whether `granted` covers `required`. Administrators are granted everything.
pub fn permits(granted: Permissions, required: Permissions) -> bool {
    granted.contains(Permissions::ADMINISTRATOR) || granted.contains(required)
}

/// Runs a resolved command, logging failures.
pub async fn run(command: &'static CommandDescriptor, cx: CommandContext<'_>) {
    tracing::debug!(
        "Command {} invoked by {} ({})",
        command.name,
        cx.author_name,
        cx.author_id
    );

    if let Err(e) = execute(command, &cx).await {
        tracing::error!("Command {} failed: {}", command.name, e);
    }
}

async fn execute(command: &'static CommandDescriptor, cx: &CommandContext<'_>) -> Result<(), AppError> {
    let is_owner = cx.is_owner();

    if cx.app.config.maintenance && !is_owner {
        cx.notify(MAINTENANCE_NOTICE).await;
        return Ok(());
    }
    if !permits(cx.bot_permissions, command.permissions) || (command.owner_only && !is_owner) {
        cx.notify(PERMISSION_NOTICE).await;
        return Ok(());
    }

    match command.kind {
        CommandKind::Help => help::help(cx).await,
        CommandKind::Ping => ping::ping(cx).await,
        CommandKind::Online => online::online(cx).await,
        CommandKind::List => online::list(cx).await,
        CommandKind::Info => info::info(cx).await,
        CommandKind::SetInfo => info::set_info(cx).await,
        CommandKind::SetArt => info::set_art(cx).await,
        CommandKind::InfoLockSwitch => info::toggle_lock(cx).await,
        CommandKind::DeleteInfo => info::delete(cx).await,
        CommandKind::Avatar => avatar::avatar(cx).await,
        CommandKind::AvatarSwitch => avatar::toggle_display(cx).await,
        CommandKind::Will => will::will(cx).await,
        CommandKind::Wait => wait::wait(cx).await,
        CommandKind::Reset => admin::reset(cx).await,
        CommandKind::ReUsers => admin::reload_users(cx).await,
    }
}
