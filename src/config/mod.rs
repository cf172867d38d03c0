//! Process configuration.
//!
//! Secrets and deployment values come from the environment (optionally through a `.env`
//! file). Guild behaviour such as role and channel ids, colours and bug report questions
//! lives in the YAML file described by [`settings::Settings`]. Both are loaded once at
//! startup and handed to components explicitly.

pub mod settings;

use std::path::PathBuf;

use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SETTINGS_PATH: &str = "config.yml";

pub struct Config {
    pub discord_bot_token: String,
    pub discord_guild_id: GuildId,
    pub database_url: String,
    pub settings_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_id = required_var("DISCORD_GUILD_ID")?;
        let discord_guild_id = guild_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(GuildId::new)
            .ok_or(ConfigError::InvalidEnvVar {
                name: "DISCORD_GUILD_ID".to_string(),
                value: guild_id,
            })?;

        Ok(Self {
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_guild_id,
            database_url: required_var("DATABASE_URL")?,
            settings_path: std::env::var("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH)),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
