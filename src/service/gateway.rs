//! The seam between moderation services and Discord.

use serenity::{
    all::{ChannelId, MessageId, ReactionType, UserId},
    async_trait,
};

use crate::{
    error::platform::PlatformError,
    model::{
        display::DisplayUnit,
        member::MemberStanding,
        platform::{RecentMessage, ThreadLookup},
    },
};

/// Platform operations used by the moderation services, scoped to a single guild.
///
/// Every method maps Discord rejections to `PlatformError` so services can turn them
/// into specific replies.
#[async_trait]
pub trait ModerationGateway: Send + Sync {
    /// Whether the channel exists and is visible to the bot.
    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, PlatformError>;

    /// Looks up the bot's standing against a member.
    ///
    /// Returns `None` when the user is not a member of the guild.
    async fn member_standing(&self, user_id: UserId)
        -> Result<Option<MemberStanding>, PlatformError>;

    async fn ban(&self, user_id: UserId, reason: &str) -> Result<(), PlatformError>;

    async fn kick(&self, user_id: UserId, reason: &str) -> Result<(), PlatformError>;

    /// Fetches up to `limit` of the most recent messages in a channel, newest first.
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<RecentMessage>, PlatformError>;

    /// Deletes the given messages, in bulk where the platform allows it.
    async fn delete_messages(
        &self,
        channel_id: ChannelId,
        message_ids: &[MessageId],
    ) -> Result<(), PlatformError>;

    async fn send_display(
        &self,
        channel_id: ChannelId,
        display: &DisplayUnit,
    ) -> Result<MessageId, PlatformError>;

    async fn send_text(&self, channel_id: ChannelId, text: &str)
        -> Result<MessageId, PlatformError>;

    async fn react(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: &ReactionType,
    ) -> Result<(), PlatformError>;

    /// Starts a public thread from a message and returns the thread's channel ID.
    async fn start_thread(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        name: &str,
    ) -> Result<ChannelId, PlatformError>;

    /// Resolves the starter post of the thread `channel_id`.
    async fn thread_starter(&self, channel_id: ChannelId) -> Result<ThreadLookup, PlatformError>;

    /// Replaces the embeds of an existing message with `display`.
    async fn edit_display(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        display: &DisplayUnit,
    ) -> Result<(), PlatformError>;

    /// Locks and archives a thread.
    async fn close_thread(&self, thread_id: ChannelId) -> Result<(), PlatformError>;
}
