use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{handler::Handler, state::BotState},
    config::Config,
    error::AppError,
};

/// Builds the Discord client without connecting it.
///
/// Reactions are needed for the suggestion vote guard. None of the intents are
/// privileged, so nothing has to be enabled in the Developer Portal.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared bot state moved into the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed, e.g. the token is malformed
pub async fn init_bot(config: &Config, state: BotState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects the client and blocks until every shard has shut down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
