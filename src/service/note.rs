//! Moderator notes attached to users.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    config::settings::Settings,
    data::note::NoteRepository,
    error::command::CommandError,
    model::{
        display::DisplayUnit,
        member::{Invoker, UserRef},
        moderation::{ModerationAction, ModerationRecord, ModerationTarget},
        note::{CreateNoteParam, Note},
    },
    service::{auth::require_moderator, gateway::ModerationGateway, log::ModerationLog},
    util::{
        discord::{timestamp_tag, user_mention},
        parse::truncate_chars,
    },
};

/// Discord allows at most 25 fields per embed.
const MAX_LISTED_NOTES: usize = 25;
const NOTES_COLOR: u32 = 0x00BFFF;
/// Leaves room for the author and date lines inside a 1024 character field.
const MAX_LISTED_CONTENT_CHARS: usize = 900;

/// Result of viewing a user's notes.
#[derive(Debug, Clone, PartialEq)]
pub enum NotesView {
    /// The user has no notes; carries the reply text.
    Empty(String),
    Listing(DisplayUnit),
}

pub struct NoteService<'a, G: ModerationGateway> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
    settings: &'a Settings,
}

impl<'a, G: ModerationGateway> NoteService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G, settings: &'a Settings) -> Self {
        Self {
            db,
            gateway,
            settings,
        }
    }

    /// Adds a note to a user and logs it with the note text as the reason.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation including the new note's ID
    /// - `Err(CommandError::Unauthorized)` - Invoker is not a moderator
    /// - `Err(CommandError::Configuration)` - Log channel missing
    /// - `Err(CommandError::Persistence)` - Note could not be stored
    pub async fn add(
        &self,
        invoker: &Invoker,
        subject: &UserRef,
        content: &str,
    ) -> Result<String, CommandError> {
        require_moderator(invoker, self.settings)?;

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        let note = NoteRepository::new(self.db)
            .create(CreateNoteParam {
                subject_user_id: subject.id.get(),
                content: content.to_string(),
                author_id: invoker.user.id.get(),
                author_name: invoker.user.name.clone(),
            })
            .await?;
        tracing::info!(
            "{} added note {} to {} ({})",
            invoker.user.name,
            note.id,
            subject.name,
            subject.id
        );

        log.post(&ModerationRecord {
            action: ModerationAction::NoteAdded,
            actor: invoker.user.clone(),
            target: ModerationTarget::User(subject.clone()),
            reason: content.to_string(),
            timestamp: note.created_at,
        })
        .await;

        Ok(format!(
            "Successfully added note to {} with ID: `{}`",
            subject.name, note.id
        ))
    }

    /// Removes one of a user's notes.
    ///
    /// The note must belong to `subject`; an ID that is not a number or belongs to
    /// someone else is reported the same way as a missing note.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation
    /// - `Err(CommandError::Precondition)` - No such note for this user
    /// - `Err(CommandError::Unauthorized)`, `Configuration`, `Persistence` - As for add
    pub async fn remove(
        &self,
        invoker: &Invoker,
        subject: &UserRef,
        note_id: &str,
    ) -> Result<String, CommandError> {
        require_moderator(invoker, self.settings)?;

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        let not_found = || {
            CommandError::precondition(format!(
                "Error: Could not find note with ID `{}` for {}.",
                note_id, subject.name
            ))
        };

        let id: i32 = note_id.trim().parse().map_err(|_| not_found())?;
        if !NoteRepository::new(self.db)
            .delete(subject.id.get(), id)
            .await?
        {
            return Err(not_found());
        }
        tracing::info!(
            "{} removed note {} from {} ({})",
            invoker.user.name,
            id,
            subject.name,
            subject.id
        );

        log.post(&ModerationRecord {
            action: ModerationAction::NoteRemoved,
            actor: invoker.user.clone(),
            target: ModerationTarget::User(subject.clone()),
            reason: format!("Note ID: {}", id),
            timestamp: Utc::now(),
        })
        .await;

        Ok(format!(
            "Successfully removed note with ID `{}` from {}.",
            id, subject.name
        ))
    }

    /// Lists a user's notes, newest first, as a private embed.
    ///
    /// Viewing does not log anything, so the log channel is not required.
    pub async fn view(
        &self,
        invoker: &Invoker,
        subject: &UserRef,
        avatar_url: String,
    ) -> Result<NotesView, CommandError> {
        require_moderator(invoker, self.settings)?;

        let notes = NoteRepository::new(self.db)
            .get_by_subject(subject.id.get())
            .await?;

        if notes.is_empty() {
            return Ok(NotesView::Empty(format!("{} has no notes.", subject.name)));
        }

        Ok(NotesView::Listing(notes_listing(subject, avatar_url, &notes)))
    }
}

fn notes_listing(subject: &UserRef, avatar_url: String, notes: &[Note]) -> DisplayUnit {
    let mut display = DisplayUnit::new()
        .title(format!("Notes for {}", subject.name))
        .color(NOTES_COLOR)
        .thumbnail(avatar_url)
        .timestamp(Utc::now());

    for (index, note) in notes.iter().take(MAX_LISTED_NOTES).enumerate() {
        display = display.field(
            format!("Note #{} (ID: {})", index + 1, note.id),
            format!(
                "**Content:** {}\n**Added by:** {} ({})\n**Date:** {}",
                truncate_chars(&note.content, MAX_LISTED_CONTENT_CHARS),
                user_mention(note.author_id),
                note.author_name,
                timestamp_tag(note.created_at, 'f')
            ),
            false,
        );
    }

    if notes.len() > MAX_LISTED_NOTES {
        display = display.footer(format!(
            "Showing {} of {} notes",
            MAX_LISTED_NOTES,
            notes.len()
        ));
    }

    display
}
