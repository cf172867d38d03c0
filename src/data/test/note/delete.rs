use super::*;

/// Tests deleting a note for its own user.
///
/// Verifies that the first delete removes the row and reports success while a repeated
/// delete reports that nothing matched.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_note_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let note = factory::create_note(db, 7).await?;

    let repo = NoteRepository::new(db);
    assert!(repo.delete(7, note.id).await?);
    assert!(!repo.delete(7, note.id).await?);

    let stored = entity::prelude::Note::find_by_id(note.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a note through a different user.
///
/// Verifies that a note ID alone is not enough to delete; the subject must match too.
///
/// Expected: Ok(false) with note still stored
#[tokio::test]
async fn rejects_cross_user_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let note = factory::create_note(db, 7).await?;

    let repo = NoteRepository::new(db);
    let deleted = repo.delete(8, note.id).await?;

    assert!(!deleted);
    assert_eq!(repo.get_by_subject(7).await?.len(), 1);

    Ok(())
}

/// Tests deleting a note ID that never existed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoteRepository::new(db);
    let deleted = repo.delete(7, 12345).await?;

    assert!(!deleted);

    Ok(())
}
