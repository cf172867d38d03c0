//! Moderation log formatting.

use crate::{
    model::{
        display::DisplayUnit,
        moderation::{ModerationRecord, ModerationTarget},
    },
    util::discord::{channel_mention, timestamp_tag, user_mention},
};

/// Builds the log embed for a moderation action.
///
/// The output depends only on the record; the timestamp shown in the Date field and on
/// the embed is the record's own, so the same record always formats identically. The
/// reason is placed in a code span without truncation.
///
/// # Arguments
/// - `record` - The action to format
///
/// # Returns
/// - `DisplayUnit` - Embed titled `"{label} | Case"` with Moderator, target, Date and
///   Reason fields
pub fn format_moderation_record(record: &ModerationRecord) -> DisplayUnit {
    let moderator = format!(
        "{} ({})",
        user_mention(record.actor.id.get()),
        record.actor.name
    );

    let (target_label, target_value) = match &record.target {
        ModerationTarget::User(user) => (
            "User",
            format!("{} ({})", user_mention(user.id.get()), user.name),
        ),
        ModerationTarget::Channel { id, name } => (
            "Channel",
            format!("{} (#{})", channel_mention(id.get()), name),
        ),
    };

    let date = format!(
        "{} {}",
        timestamp_tag(record.timestamp, 'd'),
        timestamp_tag(record.timestamp, 'f')
    );

    DisplayUnit::new()
        .title(format!("{} | Case", record.action.label()))
        .color(record.action.color())
        .timestamp(record.timestamp)
        .field("Moderator", moderator, true)
        .field(target_label, target_value, true)
        .field("Date", date, true)
        .field("Reason", format!("`{}`", record.reason), false)
}
