mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use crate::{
    bot::state::BotState,
    config::Config,
    error::AppError,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let settings = startup::load_settings(&config)?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Connected to database");

    let state = BotState::new(db, settings, config.discord_guild_id);
    let client = bot::start::init_bot(&config, state.clone()).await?;

    // Ctrl-C stops every shard, which ends `start_bot` below
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        state.stop_status_rotation().await;
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(client).await
}
