use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::{settings::Settings, Config},
    error::AppError,
};

const DEFAULT_LOG_FILTER: &str = "info,modbot=debug";

/// Installs the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` overrides the default `info,modbot=debug` filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes the connection pool from the configured URL (SQLite or Postgres), then
/// runs all pending SeaORM migrations so the note table and its index exist before the
/// bot handles any command.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads and validates the guild settings file named by the configuration.
pub fn load_settings(config: &Config) -> Result<Arc<Settings>, AppError> {
    let settings = Settings::load(&config.settings_path)?;

    tracing::info!(
        "Loaded settings from {} ({} bug report questions, {} status entries)",
        config.settings_path.display(),
        settings.bug_report.questions.len(),
        settings.status.entries.len()
    );
    if settings.channels.logs.is_none() {
        tracing::warn!("No logs channel configured; moderation commands will be refused");
    }

    Ok(Arc::new(settings))
}
