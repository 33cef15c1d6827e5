//! Ready event handler for bot initialization.
//!
//! Fired once per connection after the gateway handshake. Logs the connection and
//! advertises the help command as the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state, used for the command prefix
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::playing(format!(
        "{}help for commands",
        state.prefix
    ))));
}
