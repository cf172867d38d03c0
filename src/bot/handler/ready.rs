//! Ready event handler for bot initialization.
//!
//! The first ready event of the process registers the guild's slash commands and starts
//! the status rotation. Later ready events come from gateway reconnects and only log.

use serenity::all::{ActivityData, Context, Ready, ShardMessenger};

use crate::{
    bot::{command, state::BotState},
    scheduler::status::{PresenceSink, StatusRotation},
};

/// Pushes presence updates through the shard that received the ready event.
struct ShardPresence(ShardMessenger);

impl PresenceSink for ShardPresence {
    fn set_presence(&self, activity: ActivityData) {
        self.0.set_activity(Some(activity));
    }
}

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state holding settings and the rotation slot
/// - `ctx` - Discord context for the HTTP client and shard messenger
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if !state.begin_initialization() {
        tracing::debug!("Reconnected; skipping command registration");
        return;
    }

    let commands = command::definitions(&state.settings);
    match state.guild_id.set_commands(&ctx.http, commands).await {
        Ok(registered) => tracing::info!(
            "Registered {} commands in guild {}",
            registered.len(),
            state.guild_id
        ),
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }

    match StatusRotation::start(&state.settings.status, ShardPresence(ctx.shard.clone())).await {
        Ok(rotation) => state.set_status_rotation(rotation).await,
        Err(e) => tracing::error!("Failed to start status rotation: {}", e),
    }
}
