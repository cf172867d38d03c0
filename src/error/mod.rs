//! Error types and user-facing reply mapping.
//!
//! `AppError` is the top-level error for process startup and background tasks. A failure
//! there is logged and, during startup, terminates the process. `CommandError` is the
//! taxonomy for a single slash-command invocation. It is always caught at the interaction
//! boundary and converted into a private reply through `CommandError::user_message`.

pub mod command;
pub mod config;
pub mod platform;
pub mod settings;

use thiserror::Error;

use crate::error::{config::ConfigError, settings::SettingsError};

/// Top-level application error type.
///
/// Aggregates every error that can abort startup or a background task. Command handlers
/// never return this type; see [`command::CommandError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Environment configuration is missing or malformed.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The YAML settings file could not be read, parsed or validated.
    #[error(transparent)]
    SettingsErr(#[from] SettingsError),

    /// Database connection or migration error from SeaORM.
    ///
    /// At startup this is fatal: the bot exits rather than running without its note store.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error from the status rotation task.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Boxes the error to keep `AppError` small, as serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
