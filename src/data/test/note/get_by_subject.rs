use super::*;

/// Tests listing notes for a user.
///
/// Verifies that notes come back newest first and that another user's notes are not
/// included.
///
/// Expected: Ok with the user's notes in descending creation order
#[tokio::test]
async fn returns_notes_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::NoteFactory::new(db)
        .subject_user_id(7)
        .content("oldest")
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let newest = factory::NoteFactory::new(db)
        .subject_user_id(7)
        .content("newest")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let middle = factory::NoteFactory::new(db)
        .subject_user_id(7)
        .content("middle")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::create_note(db, 8).await?;

    let repo = NoteRepository::new(db);
    let notes = repo.get_by_subject(7).await?;

    let ids: Vec<i32> = notes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    assert!(notes.windows(2).all(|w| w[0].created_at > w[1].created_at));

    Ok(())
}

/// Tests the ordering of notes that share a creation time.
///
/// Expected: Ok with the later-inserted note first
#[tokio::test]
async fn breaks_ties_by_descending_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc::now() - Duration::minutes(5);
    let first = factory::NoteFactory::new(db)
        .subject_user_id(7)
        .created_at(at)
        .build()
        .await?;
    let second = factory::NoteFactory::new(db)
        .subject_user_id(7)
        .created_at(at)
        .build()
        .await?;

    let repo = NoteRepository::new(db);
    let notes = repo.get_by_subject(7).await?;

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, second.id);
    assert_eq!(notes[1].id, first.id);

    Ok(())
}

/// Tests listing notes for a user without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_note(db, 8).await?;

    let repo = NoteRepository::new(db);
    let notes = repo.get_by_subject(7).await?;

    assert!(notes.is_empty());

    Ok(())
}

/// Tests adding two notes through the repository and listing them.
///
/// Expected: Ok with two notes, the second-added first
#[tokio::test]
async fn lists_notes_added_through_repository() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Note)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoteRepository::new(db);
    let first = repo.create(param(7, "a")).await?;
    let second = repo.create(param(7, "b")).await?;

    let notes = repo.get_by_subject(7).await?;

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, second.id);
    assert_eq!(notes[0].content, "b");
    assert_eq!(notes[1].id, first.id);

    Ok(())
}
