//! Domain models for moderator notes.

use chrono::{DateTime, Utc};

/// Annotation a moderator attached to a user.
///
/// Notes are immutable once created; correcting one means adding a new note and
/// removing the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Store-assigned identifier, used for removal.
    pub id: i32,
    /// Discord ID of the annotated user.
    pub subject_user_id: u64,
    pub content: String,
    /// Discord ID of the moderator who wrote the note.
    pub author_id: u64,
    /// Moderator's username at the time the note was written.
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Converts an entity model to a note domain model at the repository boundary.
    pub fn from_entity(entity: entity::note::Model) -> Self {
        Self {
            id: entity.id,
            subject_user_id: entity.subject_user_id as u64,
            content: entity.content,
            author_id: entity.author_id as u64,
            author_name: entity.author_name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for adding a note to a user.
#[derive(Debug, Clone)]
pub struct CreateNoteParam {
    pub subject_user_id: u64,
    pub content: String,
    pub author_id: u64,
    pub author_name: String,
}
