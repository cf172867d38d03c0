//! Platform data the services read through the gateway.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, MessageId};

use super::display::DisplayUnit;

/// A message considered for bulk deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentMessage {
    pub id: MessageId,
    pub created_at: DateTime<Utc>,
}

/// The post a thread was started from.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadStarter {
    pub thread_id: ChannelId,
    pub thread_name: String,
    pub parent_id: ChannelId,
    pub message_id: MessageId,
    /// First embed on the starter message, if it has one.
    pub display: Option<DisplayUnit>,
}

/// Result of resolving the thread a command was invoked in.
#[derive(Debug, Clone, PartialEq)]
pub enum ThreadLookup {
    /// The channel is not a thread.
    NotThread,
    /// The channel is a thread but its starter message is gone or was never a message.
    StarterMissing,
    Found(ThreadStarter),
}
