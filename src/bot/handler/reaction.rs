use serenity::all::{Context, Reaction, ReactionType};

use crate::{service::presenter::Control, state::AppState};

/// Forwards a navigation press on a live list to its presenter.
///
/// Reactions by the bot itself or by other bots are ignored.
pub async fn handle_reaction(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }
    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return;
    };
    let Some(control) = Control::from_emoji(emoji) else {
        return;
    };
    if !state.presenters.is_active(reaction.message_id).await {
        return;
    }

    let is_bot = match &reaction.member {
        Some(member) => member.user.bot,
        None => match user_id.to_user(&ctx).await {
            Ok(user) => user.bot,
            Err(e) => {
                tracing::debug!("Failed to resolve reacting user {}: {}", user_id, e);
                return;
            }
        },
    };
    if is_bot {
        return;
    }

    state.presenters.dispatch(reaction.message_id, control).await;
}
