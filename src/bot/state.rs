use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use sea_orm::DatabaseConnection;
use serenity::all::GuildId;
use tokio::sync::Mutex;

use crate::{
    config::settings::Settings, scheduler::status::StatusRotation,
    service::embed_session::EmbedSessionStore,
};

/// State shared by every event the bot handles.
#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub settings: Arc<Settings>,
    /// The single guild the bot moderates and registers commands in.
    pub guild_id: GuildId,
    pub sessions: EmbedSessionStore,
    /// Running status rotation, set on the first ready event.
    status: Arc<Mutex<Option<StatusRotation>>>,
    initialized: Arc<AtomicBool>,
}

impl BotState {
    pub fn new(db: DatabaseConnection, settings: Arc<Settings>, guild_id: GuildId) -> Self {
        Self {
            db,
            settings,
            guild_id,
            sessions: EmbedSessionStore::new(),
            status: Arc::new(Mutex::new(None)),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` exactly once, for the first ready event of the process.
    ///
    /// Gateway reconnects fire ready again; one-time setup is skipped for those.
    pub fn begin_initialization(&self) -> bool {
        !self.initialized.swap(true, Ordering::AcqRel)
    }

    pub async fn set_status_rotation(&self, rotation: StatusRotation) {
        *self.status.lock().await = Some(rotation);
    }

    /// Stops the status rotation if it is running.
    pub async fn stop_status_rotation(&self) {
        let Some(rotation) = self.status.lock().await.take() else {
            return;
        };

        if let Err(e) = rotation.stop().await {
            tracing::error!("Failed to stop status rotation: {}", e);
        }
    }
}
