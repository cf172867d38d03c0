use crate::{data::note::NoteRepository, model::note::CreateNoteParam};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_subject;

fn param(subject_user_id: u64, content: &str) -> CreateNoteParam {
    CreateNoteParam {
        subject_user_id,
        content: content.to_string(),
        author_id: 900,
        author_name: "mod".to_string(),
    }
}
