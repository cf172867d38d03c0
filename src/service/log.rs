//! Delivery of moderation records to the configured log channel.

use serenity::all::ChannelId;

use crate::{
    config::settings::Settings,
    error::command::CommandError,
    model::moderation::ModerationRecord,
    service::{format::format_moderation_record, gateway::ModerationGateway},
};

/// A log channel that was checked to exist.
///
/// Obtained through [`ModerationLog::resolve`] before a command performs its side effect,
/// so a misconfigured channel stops the command while nothing has happened yet.
pub struct ModerationLog<'a, G: ModerationGateway> {
    gateway: &'a G,
    channel_id: ChannelId,
}

impl<'a, G: ModerationGateway> ModerationLog<'a, G> {
    /// Validates the configured log channel.
    ///
    /// # Returns
    /// - `Ok(ModerationLog)` - Channel is configured and exists
    /// - `Err(CommandError::Configuration)` - Channel is unset or not visible to the bot
    /// - `Err(CommandError::PlatformAction)` - Lookup itself failed
    pub async fn resolve(gateway: &'a G, settings: &Settings) -> Result<Self, CommandError> {
        let channel_id = settings
            .channels
            .logs
            .ok_or_else(|| CommandError::Configuration("Logs channel not configured".to_string()))?;

        if !gateway.channel_exists(channel_id).await? {
            return Err(CommandError::Configuration(
                "Logs channel not found".to_string(),
            ));
        }

        Ok(Self {
            gateway,
            channel_id,
        })
    }

    /// Formats and posts a record, returning the delivery failure.
    ///
    /// Used where the log entry is the action itself, as for warnings.
    pub async fn try_post(&self, record: &ModerationRecord) -> Result<(), CommandError> {
        let display = format_moderation_record(record);

        self.gateway.send_display(self.channel_id, &display).await?;

        Ok(())
    }

    /// Formats and posts a record.
    ///
    /// The action has already happened when this runs, so a failed post is logged
    /// rather than reported as a failure of the command.
    pub async fn post(&self, record: &ModerationRecord) {
        let display = format_moderation_record(record);

        if let Err(e) = self.gateway.send_display(self.channel_id, &display).await {
            tracing::error!(
                "Failed to post {} log to channel {}: {}",
                record.action.label(),
                self.channel_id,
                e
            );
        }
    }
}
