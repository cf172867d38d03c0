use chrono::{Duration, Utc};
use serenity::all::{ChannelId, MessageId, RoleId, UserId};

use crate::{
    config::settings::{tests::sample_settings, Settings},
    error::{command::CommandError, platform::PlatformError},
    model::{
        display::DisplayUnit,
        member::{Invoker, UserRef},
        platform::{RecentMessage, ThreadLookup, ThreadStarter},
    },
};

use gateway::{Call, FakeGateway};

mod intake;
mod moderation;
mod note;

fn settings() -> Settings {
    sample_settings()
}

fn logs_channel() -> ChannelId {
    ChannelId::new(222222222222222222)
}

fn bug_channel() -> ChannelId {
    ChannelId::new(333333333333333333)
}

fn suggestion_channel() -> ChannelId {
    ChannelId::new(444444444444444444)
}

fn moderator() -> Invoker {
    Invoker {
        user: UserRef::new(10u64, "alice"),
        role_ids: vec![RoleId::new(111111111111111111)],
        administrator: false,
    }
}

fn regular_member() -> Invoker {
    Invoker {
        user: UserRef::new(11u64, "mallory"),
        role_ids: vec![RoleId::new(5)],
        administrator: false,
    }
}

fn target() -> UserRef {
    UserRef::new(20u64, "bob")
}

fn message_aged(id: u64, age: Duration) -> RecentMessage {
    RecentMessage {
        id: MessageId::new(id),
        created_at: Utc::now() - age,
    }
}

/// Log embeds posted to the logs channel, in order.
fn log_entries(gateway: &FakeGateway) -> Vec<DisplayUnit> {
    gateway
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::SendDisplay {
                channel_id,
                display,
            } if channel_id == logs_channel() => Some(display),
            _ => None,
        })
        .collect()
}
