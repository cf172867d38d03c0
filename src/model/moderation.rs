//! Moderation action records fed to the log formatter.

use chrono::{DateTime, Utc};
use serenity::all::ChannelId;

use super::member::UserRef;

/// Default colour for actions without a dedicated colour (Discord blurple).
pub const DEFAULT_ACTION_COLOR: u32 = 0x5865F2;

/// Kind of moderation action being logged.
///
/// `Other` carries its own label and always renders with the default colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationAction {
    Warn,
    Kick,
    Ban,
    NoteAdded,
    NoteRemoved,
    Nuke,
    Other(String),
}

impl ModerationAction {
    pub fn label(&self) -> &str {
        match self {
            Self::Warn => "Warn",
            Self::Kick => "Kick",
            Self::Ban => "Ban",
            Self::NoteAdded => "Note Added",
            Self::NoteRemoved => "Note Removed",
            Self::Nuke => "Nuke",
            Self::Other(label) => label,
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            Self::Warn => 0xFFD700,
            Self::Kick => 0xFFA500,
            Self::Ban => 0xFF0000,
            Self::NoteAdded | Self::NoteRemoved => 0x00BFFF,
            Self::Nuke => 0xFF1493,
            Self::Other(_) => DEFAULT_ACTION_COLOR,
        }
    }
}

/// Who or what the action was applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationTarget {
    User(UserRef),
    Channel { id: ChannelId, name: String },
}

/// One moderation action, built per invocation and consumed once by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationRecord {
    pub action: ModerationAction,
    pub actor: UserRef,
    pub target: ModerationTarget,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}
