//! Discord gateway side of the bot.
//!
//! The client is built in [`start`], events are routed by [`handler::Handler`] to one
//! module per event, and commands from both the chat and the slash surface are executed
//! by [`command`]. Replies go through [`reply::Reply`] so handlers do not care which
//! surface invoked them; multi-page lists are driven by [`presenter`]. Background jobs reach the live
//! connection through [`gateway::Gateway`].
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel cache used for permission checks
//! - `GUILD_MESSAGES`, `DIRECT_MESSAGES` - Chat commands
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS`, `DIRECT_MESSAGE_REACTIONS` - List navigation

pub mod command;
pub mod gateway;
pub mod handler;
pub mod presenter;
pub mod reply;
pub mod start;
