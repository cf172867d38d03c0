use super::*;

/// Tests creating a note.
///
/// Verifies that the repository assigns an ID, stamps the creation time and persists
/// every field the caller supplied.
///
/// Expected: Ok with note stored
#[tokio::test]
async fn creates_note() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = NoteRepository::new(db);
    let note = repo.create(param(42, "spamming links")).await?;

    assert_eq!(note.subject_user_id, 42);
    assert_eq!(note.content, "spamming links");
    assert_eq!(note.author_id, 900);
    assert_eq!(note.author_name, "mod");
    assert!(note.created_at >= before - Duration::seconds(1));

    let stored = entity::prelude::Note::find_by_id(note.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().subject_user_id, 42);

    Ok(())
}

/// Tests that each created note receives a distinct ID.
///
/// Expected: Ok with two different IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoteRepository::new(db);
    let first = repo.create(param(42, "first")).await?;
    let second = repo.create(param(42, "second")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that creating a note without its table surfaces a database error.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoteRepository::new(db);
    let result = repo.create(param(42, "lost")).await;

    assert!(result.is_err());

    Ok(())
}
