//! Note factory for creating test note entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test notes with customizable fields.
///
/// Unlike the repository, the factory lets tests pin `created_at` so ordering can be
/// asserted against known timestamps.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::note::NoteFactory;
///
/// let note = NoteFactory::new(&db)
///     .subject_user_id(123)
///     .content("spamming links")
///     .created_at(Utc::now() - Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct NoteFactory<'a> {
    db: &'a DatabaseConnection,
    subject_user_id: u64,
    content: String,
    author_id: u64,
    author_name: String,
    created_at: DateTime<Utc>,
}

impl<'a> NoteFactory<'a> {
    /// Creates a new NoteFactory with default values.
    ///
    /// Defaults:
    /// - subject_user_id: auto-generated
    /// - content: `"Note {id}"`
    /// - author_id: auto-generated
    /// - author_name: `"Moderator {id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            subject_user_id: id,
            content: format!("Note {}", id),
            author_id: next_id(),
            author_name: format!("Moderator {}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the user the note is attached to.
    pub fn subject_user_id(mut self, subject_user_id: u64) -> Self {
        self.subject_user_id = subject_user_id;
        self
    }

    /// Sets the note content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the moderator who authored the note.
    pub fn author(mut self, author_id: u64, author_name: impl Into<String>) -> Self {
        self.author_id = author_id;
        self.author_name = author_name.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the note entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::note::Model)` - Created note entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::note::Model, DbErr> {
        entity::note::ActiveModel {
            id: ActiveValue::NotSet,
            subject_user_id: ActiveValue::Set(self.subject_user_id as i64),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id as i64),
            author_name: ActiveValue::Set(self.author_name),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a note for the given subject with default values.
///
/// Shorthand for `NoteFactory::new(db).subject_user_id(subject_user_id).build().await`.
pub async fn create_note(
    db: &DatabaseConnection,
    subject_user_id: u64,
) -> Result<entity::note::Model, DbErr> {
    NoteFactory::new(db)
        .subject_user_id(subject_user_id)
        .build()
        .await
}
