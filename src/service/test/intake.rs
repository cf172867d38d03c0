use super::*;
use crate::service::intake::{BugAnswer, IntakeService, Submitter};

fn submitter() -> Submitter {
    Submitter {
        user: UserRef::new(40u64, "carol"),
        avatar_url: "https://cdn.example/carol.png".to_string(),
    }
}

/// Tests posting a bug report.
///
/// Verifies the embed layout, that blank answers are dropped, and that the thread is
/// started from the posted message with an intro mentioning the reporter.
///
/// Expected: Ok with post, thread and intro in order
#[tokio::test]
async fn posts_bug_report_with_thread() {
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(bug_channel());
    let answers = vec![
        BugAnswer {
            label: "Summary".to_string(),
            value: "Crash on login".to_string(),
        },
        BugAnswer {
            label: "Steps to reproduce".to_string(),
            value: "  ".to_string(),
        },
    ];

    let reply = IntakeService::new(&gateway, &settings)
        .submit_bug_report(&submitter(), &answers)
        .await
        .unwrap();

    assert!(reply.starts_with("Your bug report has been submitted successfully!"));
    let effects = gateway.side_effects();
    assert_eq!(effects.len(), 3);

    let Call::SendDisplay {
        channel_id,
        display,
    } = &effects[0]
    else {
        panic!("expected post first");
    };
    assert_eq!(*channel_id, bug_channel());
    assert_eq!(display.title.as_deref(), Some("🐛 New Bug Report"));
    assert_eq!(display.color, Some(0xff5555));
    assert_eq!(display.author.as_ref().map(|a| a.name.as_str()), Some("carol"));
    assert_eq!(display.fields.len(), 1);
    assert_eq!(display.fields[0].value, "Crash on login");

    assert_eq!(
        effects[1],
        Call::StartThread {
            channel_id: bug_channel(),
            message_id: MessageId::new(1000),
            name: "Bug Report - carol".to_string()
        }
    );
    let Call::SendText { channel_id, text } = &effects[2] else {
        panic!("expected intro message");
    };
    assert_eq!(*channel_id, ChannelId::new(5000));
    assert!(text.starts_with("Bug report created by <@40>."));
}

/// Tests a bug report when the channel is gone.
///
/// Expected: Err(Configuration) and nothing posted
#[tokio::test]
async fn bug_report_requires_channel() {
    let settings = settings();
    let gateway = FakeGateway::new();

    let result = IntakeService::new(&gateway, &settings)
        .submit_bug_report(&submitter(), &[])
        .await;

    assert_eq!(
        result.unwrap_err().user_message(),
        "Error: Bug reports channel not found. Please check the configuration."
    );
    assert!(gateway.side_effects().is_empty());
}

/// Tests posting a suggestion.
///
/// Expected: embed with footer, both vote reactions, then a truncated discussion thread
#[tokio::test]
async fn posts_suggestion_with_votes_and_thread() {
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(suggestion_channel());
    let title = "a".repeat(120);

    IntakeService::new(&gateway, &settings)
        .submit_suggestion(&submitter(), &title, "Please add it")
        .await
        .unwrap();

    let effects = gateway.side_effects();
    let Call::SendDisplay { display, .. } = &effects[0] else {
        panic!("expected post first");
    };
    assert_eq!(display.title, Some(format!("💡 {}", title)));
    assert_eq!(display.description.as_deref(), Some("Please add it"));
    assert_eq!(display.color, Some(0x9600ff));
    assert_eq!(
        display.footer.as_deref(),
        Some("React with +1 or -1 to vote on this suggestion")
    );

    assert_eq!(
        effects[1],
        Call::React {
            message_id: MessageId::new(1000),
            reaction: settings.suggestions.reactions.upvote.clone()
        }
    );
    assert_eq!(
        effects[2],
        Call::React {
            message_id: MessageId::new(1000),
            reaction: settings.suggestions.reactions.downvote.clone()
        }
    );

    let Call::StartThread { name, .. } = &effects[3] else {
        panic!("expected thread");
    };
    assert_eq!(name.chars().count(), 100);
    assert!(name.starts_with("Discussion: aaa"));
    assert!(matches!(effects[4], Call::SendText { .. }));
}
