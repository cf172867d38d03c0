//! Discord markdown helpers for mentions and dynamic timestamps.

use chrono::{DateTime, Utc};

pub fn user_mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

pub fn channel_mention(channel_id: u64) -> String {
    format!("<#{}>", channel_id)
}

/// Renders a `<t:unix:style>` timestamp that each client shows in its own locale.
///
/// Styles used by the bot: `d` short date, `f` short date/time, `R` relative.
pub fn timestamp_tag(at: DateTime<Utc>, style: char) -> String {
    format!("<t:{}:{}>", at.timestamp(), style)
}
