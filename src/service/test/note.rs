use super::*;
use crate::{
    data::note::NoteRepository,
    service::note::{NoteService, NotesView},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests adding a note end to end.
///
/// Verifies that the note is stored for the subject with the moderator as author and that
/// a blue log entry carries the note text.
///
/// Expected: Ok with reply naming the stored note's ID
#[tokio::test]
async fn adds_note_and_logs() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());

    let reply = NoteService::new(db, &gateway, &settings)
        .add(&moderator(), &target(), "spamming links")
        .await
        .unwrap();

    let notes = NoteRepository::new(db).get_by_subject(20).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "spamming links");
    assert_eq!(notes[0].author_id, 10);
    assert_eq!(notes[0].author_name, "alice");
    assert_eq!(
        reply,
        format!("Successfully added note to bob with ID: `{}`", notes[0].id)
    );

    let logs = log_entries(&gateway);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].title.as_deref(), Some("Note Added | Case"));
    assert_eq!(logs[0].color, Some(0x00BFFF));
    assert_eq!(logs[0].fields[3].value, "`spamming links`");
}

/// Tests that a missing log channel stops a note from being stored.
///
/// Expected: Err(Configuration) with the store untouched
#[tokio::test]
async fn add_requires_log_channel() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new();

    let result = NoteService::new(db, &gateway, &settings)
        .add(&moderator(), &target(), "spamming links")
        .await;

    assert!(matches!(result, Err(CommandError::Configuration(_))));
    assert!(NoteRepository::new(db).get_by_subject(20).await.unwrap().is_empty());
}

/// Tests that a store failure is reported as a persistence error.
///
/// Expected: Err(Persistence) with a generic reply and no log entry
#[tokio::test]
async fn add_reports_store_failure() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());

    let result = NoteService::new(db, &gateway, &settings)
        .add(&moderator(), &target(), "spamming links")
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, CommandError::Persistence(_)));
    assert!(err.user_message().contains("Please try again later"));
    assert!(log_entries(&gateway).is_empty());
}

/// Tests removing a note.
///
/// Expected: Ok once, then a not-found precondition for the same ID
#[tokio::test]
async fn removes_note_once() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());
    let note = factory::create_note(db, 20).await.unwrap();
    let service = NoteService::new(db, &gateway, &settings);

    let reply = service
        .remove(&moderator(), &target(), &note.id.to_string())
        .await
        .unwrap();
    assert_eq!(
        reply,
        format!("Successfully removed note with ID `{}` from bob.", note.id)
    );
    assert_eq!(
        log_entries(&gateway)[0].fields[3].value,
        format!("`Note ID: {}`", note.id)
    );

    let again = service
        .remove(&moderator(), &target(), &note.id.to_string())
        .await;
    assert!(matches!(again, Err(CommandError::Precondition(_))));
    assert_eq!(log_entries(&gateway).len(), 1);
}

/// Tests removing another user's note.
///
/// Expected: Err(Precondition) and the note still stored
#[tokio::test]
async fn remove_rejects_other_users_note() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());
    let note = factory::create_note(db, 99).await.unwrap();

    let result = NoteService::new(db, &gateway, &settings)
        .remove(&moderator(), &target(), &note.id.to_string())
        .await;

    assert!(matches!(result, Err(CommandError::Precondition(_))));
    assert_eq!(NoteRepository::new(db).get_by_subject(99).await.unwrap().len(), 1);
}

/// Tests removing with an ID that is not a number.
///
/// Expected: Err(Precondition) quoting the given ID
#[tokio::test]
async fn remove_treats_malformed_id_as_missing() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new().with_channel(logs_channel());

    let result = NoteService::new(db, &gateway, &settings)
        .remove(&moderator(), &target(), "abc")
        .await;

    assert_eq!(
        result.unwrap_err().user_message(),
        "Error: Could not find note with ID `abc` for bob."
    );
}

/// Tests viewing a user without notes.
///
/// Expected: Ok(Empty) with the no-notes reply
#[tokio::test]
async fn view_reports_no_notes() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new();

    let view = NoteService::new(db, &gateway, &settings)
        .view(&moderator(), &target(), "https://cdn.example/a.png".to_string())
        .await
        .unwrap();

    assert_eq!(view, NotesView::Empty("bob has no notes.".to_string()));
}

/// Tests the notes listing.
///
/// Verifies newest-first numbering and the overflow footer once there are more notes
/// than an embed can hold.
///
/// Expected: 25 fields, newest first, footer counting all notes
#[tokio::test]
async fn view_lists_newest_first_with_cap() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new();

    let now = Utc::now();
    let mut newest_id = 0;
    for i in 0..27 {
        let note = factory::NoteFactory::new(db)
            .subject_user_id(20)
            .content(format!("note {}", i))
            .author(10, "alice")
            .created_at(now - Duration::minutes(60 - i))
            .build()
            .await
            .unwrap();
        newest_id = note.id;
    }

    let view = NoteService::new(db, &gateway, &settings)
        .view(&moderator(), &target(), "https://cdn.example/a.png".to_string())
        .await
        .unwrap();

    let NotesView::Listing(display) = view else {
        panic!("expected a listing");
    };
    assert_eq!(display.title.as_deref(), Some("Notes for bob"));
    assert_eq!(display.thumbnail.as_deref(), Some("https://cdn.example/a.png"));
    assert_eq!(display.fields.len(), 25);
    assert_eq!(
        display.fields[0].name,
        format!("Note #1 (ID: {})", newest_id)
    );
    assert!(display.fields[0].value.starts_with("**Content:** note 26"));
    assert!(display.fields[0].value.contains("<@10> (alice)"));
    assert_eq!(display.footer.as_deref(), Some("Showing 25 of 27 notes"));
    assert!(gateway.calls().is_empty());
}

/// Tests that viewing notes requires moderator rights.
///
/// Expected: Err(Unauthorized)
#[tokio::test]
async fn view_requires_moderator() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = settings();
    let gateway = FakeGateway::new();

    let result = NoteService::new(db, &gateway, &settings)
        .view(&regular_member(), &target(), String::new())
        .await;

    assert!(matches!(result, Err(CommandError::Unauthorized)));
}
