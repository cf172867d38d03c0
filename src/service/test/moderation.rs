use super::*;
use crate::service::moderation::{ModerationService, NukeTarget};

fn general() -> NukeTarget {
    NukeTarget {
        channel_id: ChannelId::new(30),
        name: "general".to_string(),
    }
}

/// Tests banning a member the bot outranks.
///
/// Verifies that the ban reaches the platform before the log entry and that the log
/// entry names both moderator and user.
///
/// Expected: Ok with ban then one log embed
#[tokio::test]
async fn bans_member_and_logs() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_member(UserId::new(20), true);

    let reply = ModerationService::new(&gateway, &settings)
        .ban(&moderator(), &target(), "raiding")
        .await
        .unwrap();

    assert_eq!(reply, "Successfully banned bob for `raiding`.");
    let calls = gateway.side_effects();
    assert_eq!(
        calls[0],
        Call::Ban {
            user_id: UserId::new(20),
            reason: "raiding".to_string()
        }
    );
    let logs = log_entries(&gateway);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].title.as_deref(), Some("Ban | Case"));
    assert_eq!(logs[0].fields[0].value, "<@10> (alice)");
    assert_eq!(logs[0].fields[1].value, "<@20> (bob)");
    assert_eq!(logs[0].fields[3].value, "`raiding`");
}

/// Tests banning a user who already left the guild.
///
/// Expected: Ok, ban issued by ID
#[tokio::test]
async fn bans_non_member_by_id() {
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());

    let result = ModerationService::new(&gateway, &settings)
        .ban(&moderator(), &target(), "alt account")
        .await;

    assert!(result.is_ok());
    assert!(matches!(gateway.side_effects()[0], Call::Ban { .. }));
}

/// Tests that an unauthorized ban never reaches the platform.
///
/// Expected: Err(Unauthorized) with no platform calls at all
#[tokio::test]
async fn unauthorized_ban_has_no_effect() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_member(UserId::new(20), true);

    let result = ModerationService::new(&gateway, &settings)
        .ban(&regular_member(), &target(), "raiding")
        .await;

    assert!(matches!(result, Err(CommandError::Unauthorized)));
    assert!(gateway.calls().is_empty());
}

/// Tests banning a member who outranks the bot.
///
/// Expected: Err(Precondition) and nothing sent
#[tokio::test]
async fn refuses_ban_of_higher_member() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_member(UserId::new(20), false);

    let result = ModerationService::new(&gateway, &settings)
        .ban(&moderator(), &target(), "raiding")
        .await;

    match result {
        Err(CommandError::Precondition(message)) => {
            assert!(message.starts_with("Error: I cannot ban this user"))
        }
        other => panic!("expected precondition error, got {:?}", other),
    }
    assert!(gateway.side_effects().is_empty());
}

/// Tests that a missing log channel stops the ban before it happens.
///
/// Expected: Err(Configuration) with no ban issued
#[tokio::test]
async fn missing_log_channel_blocks_ban() {
    let settings = settings();
    let gateway = FakeGateway::new().with_member(UserId::new(20), true);

    let result = ModerationService::new(&gateway, &settings)
        .ban(&moderator(), &target(), "raiding")
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, CommandError::Configuration(_)));
    assert_eq!(
        err.user_message(),
        "Error: Logs channel not found. Please check the configuration."
    );
    assert!(gateway.side_effects().is_empty());
}

/// Tests kicking a user who is not in the guild.
///
/// Expected: Err(Precondition) naming the missing member
#[tokio::test]
async fn kick_requires_member() {
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());

    let result = ModerationService::new(&gateway, &settings)
        .kick(&moderator(), &target(), "spam")
        .await;

    assert!(matches!(
        result,
        Err(CommandError::Precondition(ref m)) if m == "Error: Could not find that user in this server."
    ));
    assert!(gateway.side_effects().is_empty());
}

/// Tests kicking a member.
///
/// Expected: Ok with kick and an orange log entry
#[tokio::test]
async fn kicks_member_and_logs() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_member(UserId::new(20), true);

    let reply = ModerationService::new(&gateway, &settings)
        .kick(&moderator(), &target(), "spam")
        .await
        .unwrap();

    assert_eq!(reply, "Successfully kicked bob for `spam`.");
    assert!(matches!(gateway.side_effects()[0], Call::Kick { .. }));
    assert_eq!(log_entries(&gateway)[0].color, Some(0xFFA500));
}

/// Tests warning a user.
///
/// Expected: Ok with a single gold log entry as the only side effect
#[tokio::test]
async fn warns_with_log_only() {
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());

    let reply = ModerationService::new(&gateway, &settings)
        .warn(&moderator(), &target(), "language")
        .await
        .unwrap();

    assert_eq!(reply, "Successfully warned bob for `language`.");
    assert_eq!(gateway.side_effects().len(), 1);
    assert_eq!(log_entries(&gateway)[0].title.as_deref(), Some("Warn | Case"));
}

/// Tests a warning whose log entry cannot be posted.
///
/// The log entry is the warning itself, so the moderator must not be told it was
/// recorded.
///
/// Expected: Err(PlatformAction) and nothing recorded
#[tokio::test]
async fn warn_fails_when_log_post_fails() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .failing_send(PlatformError::MissingPermissions);

    let result = ModerationService::new(&gateway, &settings)
        .warn(&moderator(), &target(), "language")
        .await;

    assert!(matches!(
        result,
        Err(CommandError::PlatformAction(PlatformError::MissingPermissions))
    ));
    assert!(gateway.side_effects().is_empty());
}

/// Tests that a failed log post after a ban does not undo the reported ban.
///
/// Expected: Ok since the ban already happened
#[tokio::test]
async fn ban_succeeds_when_log_post_fails() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_member(target().id, true)
        .failing_send(PlatformError::MissingPermissions);

    let result = ModerationService::new(&gateway, &settings)
        .ban(&moderator(), &target(), "spam")
        .await;

    assert!(result.is_ok());
    assert!(matches!(gateway.side_effects()[0], Call::Ban { .. }));
}

/// Tests that an oversized nuke request is clamped to the configured maximum.
///
/// Expected: fetch limited to 100, every fresh message deleted
#[tokio::test]
async fn nuke_clamps_amount() {
    let settings = settings();
    let messages = (1..=150)
        .map(|id| message_aged(id, Duration::minutes(id as i64)))
        .collect();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_messages(messages);

    let reply = ModerationService::new(&gateway, &settings)
        .nuke(&moderator(), &general(), Some(500))
        .await
        .unwrap();

    assert_eq!(reply, "Successfully deleted 100 messages.");
    let calls = gateway.calls();
    assert_eq!(
        calls[0],
        Call::FetchMessages {
            channel_id: ChannelId::new(30),
            limit: 100
        }
    );
    match &calls[1] {
        Call::DeleteMessages { message_ids, .. } => assert_eq!(message_ids.len(), 100),
        other => panic!("expected delete, got {:?}", other),
    }
}

/// Tests a nuke where every message is past the bulk delete window.
///
/// Expected: Err(MessagesTooOld) with its own reply, nothing deleted or logged
#[tokio::test]
async fn nuke_of_only_old_messages_fails_distinctly() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_messages(vec![
            message_aged(1, Duration::days(15)),
            message_aged(2, Duration::days(30)),
        ]);

    let result = ModerationService::new(&gateway, &settings)
        .nuke(&moderator(), &general(), Some(10))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CommandError::PlatformAction(PlatformError::MessagesTooOld)
    ));
    assert_eq!(
        err.user_message(),
        "Error: Cannot delete messages older than 14 days."
    );
    assert!(gateway.side_effects().is_empty());
}

/// Tests that old messages are skipped while fresh ones are deleted.
///
/// Expected: only fresh IDs deleted, log and confirmation posted
#[tokio::test]
async fn nuke_skips_old_messages() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_messages(vec![
            message_aged(1, Duration::hours(1)),
            message_aged(2, Duration::days(20)),
            message_aged(3, Duration::hours(2)),
        ]);

    let reply = ModerationService::new(&gateway, &settings)
        .nuke(&moderator(), &general(), None)
        .await
        .unwrap();

    assert_eq!(reply, "Successfully deleted 2 messages.");
    let effects = gateway.side_effects();
    assert_eq!(
        effects[0],
        Call::DeleteMessages {
            channel_id: ChannelId::new(30),
            message_ids: vec![MessageId::new(1), MessageId::new(3)]
        }
    );

    let logs = log_entries(&gateway);
    assert_eq!(logs[0].title.as_deref(), Some("Nuke | Case"));
    assert_eq!(logs[0].fields[1].value, "<#30> (#general)");
    assert_eq!(logs[0].fields[3].value, "`Deleted 2 messages`");

    assert!(effects.iter().any(|call| matches!(
        call,
        Call::SendDisplay { channel_id, display }
            if *channel_id == ChannelId::new(30)
                && display.title.as_deref() == Some("💥 Channel Nuked!")
    )));
}

/// Tests that a platform rejection during deletion surfaces as its category.
///
/// Expected: Err(PlatformAction(MessagesTooOld)) and no log entry
#[tokio::test]
async fn nuke_maps_platform_rejection() {
    let settings = settings();
    let gateway = FakeGateway::new()
        .with_channel(logs_channel())
        .with_messages(vec![message_aged(1, Duration::hours(1))])
        .failing_delete(PlatformError::from_discord_code(50034, "too old"));

    let result = ModerationService::new(&gateway, &settings)
        .nuke(&moderator(), &general(), Some(5))
        .await;

    assert!(matches!(
        result,
        Err(CommandError::PlatformAction(PlatformError::MessagesTooOld))
    ));
    assert!(log_entries(&gateway).is_empty());
}
