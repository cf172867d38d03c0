//! Member moderation and channel purging.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serenity::all::{ChannelId, MessageId};

use crate::{
    config::settings::Settings,
    error::{command::CommandError, platform::PlatformError},
    model::{
        display::DisplayUnit,
        member::{Invoker, UserRef},
        moderation::{ModerationAction, ModerationRecord, ModerationTarget},
    },
    service::{auth::require_moderator, gateway::ModerationGateway, log::ModerationLog},
    util::discord::user_mention,
};

/// Discord refuses to bulk delete messages older than this.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

const NUKE_GIFS: [&str; 4] = [
    "https://media.tenor.com/9SQD7qR0nYcAAAAC/nuke-explosion.gif",
    "https://media.tenor.com/MqyLhqPmRDkAAAAC/nuke-nuclear-explosion.gif",
    "https://media.tenor.com/ZROOT_qxLYgAAAAC/explosion-mushroom-cloud.gif",
    "https://media.tenor.com/8DaE6qzF0DwAAAAC/nuke-explosion.gif",
];

/// The channel a nuke runs in.
#[derive(Debug, Clone)]
pub struct NukeTarget {
    pub channel_id: ChannelId,
    pub name: String,
}

pub struct ModerationService<'a, G: ModerationGateway> {
    gateway: &'a G,
    settings: &'a Settings,
}

impl<'a, G: ModerationGateway> ModerationService<'a, G> {
    pub fn new(gateway: &'a G, settings: &'a Settings) -> Self {
        Self { gateway, settings }
    }

    /// Bans a user and logs the action.
    ///
    /// Users who already left the guild can still be banned by ID; only members the bot
    /// cannot outrank are refused.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation for the moderator
    /// - `Err(CommandError::Unauthorized)` - Invoker is not a moderator
    /// - `Err(CommandError::Precondition)` - Target outranks the bot
    /// - `Err(CommandError::Configuration)` - Log channel missing
    /// - `Err(CommandError::PlatformAction)` - Discord refused the ban
    pub async fn ban(
        &self,
        invoker: &Invoker,
        target: &UserRef,
        reason: &str,
    ) -> Result<String, CommandError> {
        require_moderator(invoker, self.settings)?;

        let standing = self.gateway.member_standing(target.id).await?;
        if standing.is_some_and(|s| !s.actionable) {
            return Err(CommandError::precondition(
                "Error: I cannot ban this user. They may have higher permissions than me.",
            ));
        }

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        self.gateway.ban(target.id, reason).await?;
        tracing::info!("{} banned {} ({})", invoker.user.name, target.name, target.id);

        log.post(&self.user_record(ModerationAction::Ban, invoker, target, reason))
            .await;

        Ok(format!("Successfully banned {} for `{}`.", target.name, reason))
    }

    /// Kicks a member and logs the action.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation for the moderator
    /// - `Err(CommandError::Precondition)` - Target is not a member or outranks the bot
    /// - `Err(CommandError::Unauthorized)`, `Configuration`, `PlatformAction` - As for ban
    pub async fn kick(
        &self,
        invoker: &Invoker,
        target: &UserRef,
        reason: &str,
    ) -> Result<String, CommandError> {
        require_moderator(invoker, self.settings)?;

        match self.gateway.member_standing(target.id).await? {
            None => {
                return Err(CommandError::precondition(
                    "Error: Could not find that user in this server.",
                ))
            }
            Some(standing) if !standing.actionable => {
                return Err(CommandError::precondition(
                    "Error: I cannot kick this user. They may have higher permissions than me.",
                ))
            }
            Some(_) => {}
        }

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        self.gateway.kick(target.id, reason).await?;
        tracing::info!("{} kicked {} ({})", invoker.user.name, target.name, target.id);

        log.post(&self.user_record(ModerationAction::Kick, invoker, target, reason))
            .await;

        Ok(format!("Successfully kicked {} for `{}`.", target.name, reason))
    }

    /// Records a warning. The log entry is the only side effect, so a failed post fails
    /// the command.
    pub async fn warn(
        &self,
        invoker: &Invoker,
        target: &UserRef,
        reason: &str,
    ) -> Result<String, CommandError> {
        require_moderator(invoker, self.settings)?;

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        log.try_post(&self.user_record(ModerationAction::Warn, invoker, target, reason))
            .await?;
        tracing::info!("{} warned {} ({})", invoker.user.name, target.name, target.id);

        Ok(format!("Successfully warned {} for `{}`.", target.name, reason))
    }

    /// Bulk deletes recent messages in a channel.
    ///
    /// The requested amount defaults to and is clamped by `nuke.max_messages`. Messages
    /// past Discord's 14 day bulk delete window are skipped; if every fetched message is
    /// that old the nuke fails with `MessagesTooOld` before anything is deleted. After
    /// deleting, a confirmation embed with a random GIF is posted in the channel.
    ///
    /// # Arguments
    /// - `invoker` - Member running the command
    /// - `target` - Channel to purge
    /// - `requested` - Amount asked for, `None` for the maximum
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation stating how many messages were deleted
    /// - `Err(CommandError::PlatformAction(MessagesTooOld))` - Nothing young enough to delete
    /// - `Err(CommandError::Unauthorized)`, `Configuration`, `PlatformAction` - As for ban
    pub async fn nuke(
        &self,
        invoker: &Invoker,
        target: &NukeTarget,
        requested: Option<i64>,
    ) -> Result<String, CommandError> {
        require_moderator(invoker, self.settings)?;

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        let amount = clamp_amount(requested, self.settings.nuke.max_messages);
        let messages = self
            .gateway
            .recent_messages(target.channel_id, amount)
            .await?;

        let now = Utc::now();
        let deletable = deletable_ids(&messages, now);
        if !messages.is_empty() && deletable.is_empty() {
            return Err(PlatformError::MessagesTooOld.into());
        }

        if !deletable.is_empty() {
            self.gateway
                .delete_messages(target.channel_id, &deletable)
                .await?;
        }
        let count = deletable.len();
        tracing::info!(
            "{} nuked {} messages in #{} ({})",
            invoker.user.name,
            count,
            target.name,
            target.channel_id
        );

        log.post(&ModerationRecord {
            action: ModerationAction::Nuke,
            actor: invoker.user.clone(),
            target: ModerationTarget::Channel {
                id: target.channel_id,
                name: target.name.clone(),
            },
            reason: format!("Deleted {} messages", count),
            timestamp: now,
        })
        .await;

        let confirmation = nuke_confirmation(count, &invoker.user, now);
        if let Err(e) = self
            .gateway
            .send_display(target.channel_id, &confirmation)
            .await
        {
            tracing::warn!("Failed to post nuke confirmation in {}: {}", target.channel_id, e);
        }

        Ok(format!("Successfully deleted {} messages.", count))
    }

    fn user_record(
        &self,
        action: ModerationAction,
        invoker: &Invoker,
        target: &UserRef,
        reason: &str,
    ) -> ModerationRecord {
        ModerationRecord {
            action,
            actor: invoker.user.clone(),
            target: ModerationTarget::User(target.clone()),
            reason: reason.to_string(),
            timestamp: Utc::now(),
        }
    }
}

fn clamp_amount(requested: Option<i64>, max: u8) -> u8 {
    match requested {
        Some(amount) => amount.clamp(1, max as i64) as u8,
        None => max,
    }
}

fn deletable_ids(
    messages: &[crate::model::platform::RecentMessage],
    now: DateTime<Utc>,
) -> Vec<MessageId> {
    let cutoff = now - Duration::days(BULK_DELETE_MAX_AGE_DAYS);

    messages
        .iter()
        .filter(|m| m.created_at > cutoff)
        .map(|m| m.id)
        .collect()
}

fn nuke_confirmation(count: usize, moderator: &UserRef, now: DateTime<Utc>) -> DisplayUnit {
    let gif = NUKE_GIFS[rand::rng().random_range(0..NUKE_GIFS.len())];

    DisplayUnit::new()
        .title("💥 Channel Nuked!")
        .color(0xFF0000)
        .description(format!(
            "**{} messages** were deleted by {}",
            count,
            user_mention(moderator.id.get())
        ))
        .image(gif)
        .timestamp(now)
}
