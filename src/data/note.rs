use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::note::{CreateNoteParam, Note};

pub struct NoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a note, stamping it with the current time.
    ///
    /// The store assigns the note's ID.
    pub async fn create(&self, param: CreateNoteParam) -> Result<Note, DbErr> {
        let entity = entity::note::ActiveModel {
            id: ActiveValue::NotSet,
            subject_user_id: ActiveValue::Set(param.subject_user_id as i64),
            content: ActiveValue::Set(param.content),
            author_id: ActiveValue::Set(param.author_id as i64),
            author_name: ActiveValue::Set(param.author_name),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Note::from_entity(entity))
    }

    /// Gets all notes for a user, newest first.
    ///
    /// Notes created in the same instant are ordered by descending ID.
    pub async fn get_by_subject(&self, subject_user_id: u64) -> Result<Vec<Note>, DbErr> {
        let entities = entity::prelude::Note::find()
            .filter(entity::note::Column::SubjectUserId.eq(subject_user_id as i64))
            .order_by_desc(entity::note::Column::CreatedAt)
            .order_by_desc(entity::note::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Note::from_entity).collect())
    }

    /// Deletes a note only if it belongs to the given user.
    ///
    /// Returns `true` if a note was deleted, `false` if no note matched both the ID and
    /// the user.
    pub async fn delete(&self, subject_user_id: u64, note_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Note::delete_many()
            .filter(entity::note::Column::Id.eq(note_id))
            .filter(entity::note::Column::SubjectUserId.eq(subject_user_id as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
