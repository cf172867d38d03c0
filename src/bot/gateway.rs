//! `ModerationGateway` backed by Serenity's HTTP client.

use std::{collections::HashMap, sync::Arc};

use chrono::DateTime;
use serenity::{
    all::{
        AutoArchiveDuration, Channel, ChannelId, ChannelType, CreateMessage, CreateThread,
        EditMessage, EditThread, GetMessages, GuildId, Member, MessageId, ReactionType, Role,
        RoleId, UserId,
    },
    async_trait,
    http::Http,
};

use crate::{
    error::platform::PlatformError,
    model::{
        display::DisplayUnit,
        member::MemberStanding,
        platform::{RecentMessage, ThreadLookup, ThreadStarter},
    },
    service::gateway::ModerationGateway,
    util::parse::truncate_chars,
};

/// Discord caps audit log reasons at 512 characters.
const MAX_AUDIT_REASON_CHARS: usize = 512;
/// Slowmode applied to discussion threads, in seconds.
const THREAD_SLOWMODE_SECS: u16 = 2;

/// Gateway for a single guild, acting as the bot user.
pub struct SerenityGateway {
    http: Arc<Http>,
    guild_id: GuildId,
    bot_id: UserId,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, guild_id: GuildId, bot_id: UserId) -> Self {
        Self {
            http,
            guild_id,
            bot_id,
        }
    }

    /// Fetches a guild member, mapping "unknown member" to `None`.
    async fn find_member(&self, user_id: UserId) -> Result<Option<Member>, PlatformError> {
        match self.guild_id.member(&self.http, user_id).await {
            Ok(member) => Ok(Some(member)),
            Err(e) => match PlatformError::from(e) {
                PlatformError::UnknownTarget => Ok(None),
                other => Err(other),
            },
        }
    }
}

/// Position of the member's highest role, 0 for members with only @everyone.
fn top_role_position(roles: &HashMap<RoleId, Role>, member_roles: &[RoleId]) -> u16 {
    member_roles
        .iter()
        .filter_map(|id| roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

/// Whether a member with `actor_top` may moderate one with `target_top`.
///
/// The guild owner can never be moderated and can moderate everyone else.
fn outranks(actor_is_owner: bool, actor_top: u16, target_is_owner: bool, target_top: u16) -> bool {
    if target_is_owner {
        return false;
    }

    actor_is_owner || actor_top > target_top
}

#[async_trait]
impl ModerationGateway for SerenityGateway {
    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, PlatformError> {
        match channel_id.to_channel(&self.http).await {
            Ok(_) => Ok(true),
            Err(e) => match PlatformError::from(e) {
                PlatformError::UnknownTarget | PlatformError::MissingPermissions => Ok(false),
                other => Err(other),
            },
        }
    }

    async fn member_standing(
        &self,
        user_id: UserId,
    ) -> Result<Option<MemberStanding>, PlatformError> {
        let Some(target) = self.find_member(user_id).await? else {
            return Ok(None);
        };
        let Some(bot) = self.find_member(self.bot_id).await? else {
            return Err(PlatformError::MissingPermissions);
        };

        let guild = self.guild_id.to_partial_guild(&self.http).await?;

        let actionable = outranks(
            guild.owner_id == bot.user.id,
            top_role_position(&guild.roles, &bot.roles),
            guild.owner_id == target.user.id,
            top_role_position(&guild.roles, &target.roles),
        );

        Ok(Some(MemberStanding { actionable }))
    }

    async fn ban(&self, user_id: UserId, reason: &str) -> Result<(), PlatformError> {
        self.guild_id
            .ban_with_reason(
                &self.http,
                user_id,
                0,
                truncate_chars(reason, MAX_AUDIT_REASON_CHARS),
            )
            .await?;
        Ok(())
    }

    async fn kick(&self, user_id: UserId, reason: &str) -> Result<(), PlatformError> {
        self.guild_id
            .kick_with_reason(
                &self.http,
                user_id,
                &truncate_chars(reason, MAX_AUDIT_REASON_CHARS),
            )
            .await?;
        Ok(())
    }

    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<RecentMessage>, PlatformError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages
            .iter()
            .filter_map(|m| {
                DateTime::from_timestamp(m.timestamp.unix_timestamp(), 0).map(|created_at| {
                    RecentMessage {
                        id: m.id,
                        created_at,
                    }
                })
            })
            .collect())
    }

    async fn delete_messages(
        &self,
        channel_id: ChannelId,
        message_ids: &[MessageId],
    ) -> Result<(), PlatformError> {
        match message_ids {
            [] => {}
            // The bulk endpoint rejects fewer than two messages
            [single] => channel_id.delete_message(&self.http, *single).await?,
            many => {
                channel_id
                    .delete_messages(&self.http, many.iter().copied())
                    .await?
            }
        }
        Ok(())
    }

    async fn send_display(
        &self,
        channel_id: ChannelId,
        display: &DisplayUnit,
    ) -> Result<MessageId, PlatformError> {
        let message = channel_id
            .send_message(&self.http, CreateMessage::new().embed(display.to_embed()))
            .await?;
        Ok(message.id)
    }

    async fn send_text(
        &self,
        channel_id: ChannelId,
        text: &str,
    ) -> Result<MessageId, PlatformError> {
        let message = channel_id.say(&self.http, text).await?;
        Ok(message.id)
    }

    async fn react(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: &ReactionType,
    ) -> Result<(), PlatformError> {
        channel_id
            .create_reaction(&self.http, message_id, reaction.clone())
            .await?;
        Ok(())
    }

    async fn start_thread(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        name: &str,
    ) -> Result<ChannelId, PlatformError> {
        let thread = channel_id
            .create_thread_from_message(
                &self.http,
                message_id,
                CreateThread::new(name)
                    .auto_archive_duration(AutoArchiveDuration::OneDay)
                    .rate_limit_per_user(THREAD_SLOWMODE_SECS),
            )
            .await?;
        Ok(thread.id)
    }

    async fn thread_starter(&self, channel_id: ChannelId) -> Result<ThreadLookup, PlatformError> {
        let Channel::Guild(channel) = channel_id.to_channel(&self.http).await? else {
            return Ok(ThreadLookup::NotThread);
        };
        if !matches!(
            channel.kind,
            ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread
        ) {
            return Ok(ThreadLookup::NotThread);
        }
        let Some(parent_id) = channel.parent_id else {
            return Ok(ThreadLookup::StarterMissing);
        };

        // A thread started from a message shares that message's ID
        let message_id = MessageId::new(channel.id.get());
        let starter = match parent_id.message(&self.http, message_id).await {
            Ok(message) => message,
            Err(e) => {
                return match PlatformError::from(e) {
                    PlatformError::UnknownTarget => Ok(ThreadLookup::StarterMissing),
                    other => Err(other),
                }
            }
        };

        Ok(ThreadLookup::Found(ThreadStarter {
            thread_id: channel.id,
            thread_name: channel.name.clone(),
            parent_id,
            message_id,
            display: starter.embeds.first().map(DisplayUnit::from_embed),
        }))
    }

    async fn edit_display(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        display: &DisplayUnit,
    ) -> Result<(), PlatformError> {
        channel_id
            .edit_message(
                &self.http,
                message_id,
                EditMessage::new().embed(display.to_embed()),
            )
            .await?;
        Ok(())
    }

    async fn close_thread(&self, thread_id: ChannelId) -> Result<(), PlatformError> {
        thread_id
            .edit_thread(&self.http, EditThread::new().locked(true).archived(true))
            .await?;
        Ok(())
    }
}
