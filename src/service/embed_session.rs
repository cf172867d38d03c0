//! In-progress custom embeds built through `/embed`.
//!
//! A session holds the draft embed and the channel it will be posted to. Sessions are
//! keyed by user, so starting a new builder replaces any earlier one. Each session gets a
//! generation number and every later step presents the handle it was given; a step from a
//! replaced session finds nothing and reports the session as expired. Removal also checks
//! the generation, so an old flow ending late never evicts its successor.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use chrono::Utc;
use serenity::all::{ChannelId, UserId};
use tokio::sync::RwLock;

use crate::{
    error::command::{CommandError, InteractiveFlow},
    model::display::DisplayUnit,
    util::parse::{is_embed_url, parse_hex_color},
};

struct StoredSession {
    generation: u64,
    channel_id: ChannelId,
    draft: DisplayUnit,
}

/// Identifies one session generation for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    pub user_id: UserId,
    generation: u64,
}

/// Draft ready to post, removed from the store.
#[derive(Debug, Clone)]
pub struct FinishedEmbed {
    pub channel_id: ChannelId,
    pub draft: DisplayUnit,
}

/// Shared store of embed builder sessions.
#[derive(Clone, Default)]
pub struct EmbedSessionStore {
    sessions: Arc<RwLock<HashMap<UserId, StoredSession>>>,
    next_generation: Arc<AtomicU64>,
}

impl EmbedSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `user_id`, replacing any existing one.
    pub async fn begin(
        &self,
        user_id: UserId,
        channel_id: ChannelId,
        draft: DisplayUnit,
    ) -> SessionHandle {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;

        self.sessions.write().await.insert(
            user_id,
            StoredSession {
                generation,
                channel_id,
                draft,
            },
        );

        SessionHandle {
            user_id,
            generation,
        }
    }

    /// Returns a copy of the current draft if the session is still live.
    pub async fn draft(&self, handle: SessionHandle) -> Result<DisplayUnit, CommandError> {
        let sessions = self.sessions.read().await;

        sessions
            .get(&handle.user_id)
            .filter(|s| s.generation == handle.generation)
            .map(|s| s.draft.clone())
            .ok_or(CommandError::Timeout(InteractiveFlow::EmbedBuilder))
    }

    /// Applies `change` to the live draft and returns the updated copy.
    ///
    /// # Returns
    /// - `Ok(DisplayUnit)` - Draft after the change
    /// - `Err(CommandError::Timeout)` - Session expired or was replaced
    /// - `Err(_)` - Whatever `change` rejected; the draft is left as it was
    pub async fn update<F>(&self, handle: SessionHandle, change: F) -> Result<DisplayUnit, CommandError>
    where
        F: FnOnce(DisplayUnit) -> Result<DisplayUnit, CommandError>,
    {
        let mut sessions = self.sessions.write().await;

        let session = sessions
            .get_mut(&handle.user_id)
            .filter(|s| s.generation == handle.generation)
            .ok_or(CommandError::Timeout(InteractiveFlow::EmbedBuilder))?;

        session.draft = change(session.draft.clone())?;

        Ok(session.draft.clone())
    }

    /// Removes the session and hands back the draft for posting.
    pub async fn take(&self, handle: SessionHandle) -> Result<FinishedEmbed, CommandError> {
        let mut sessions = self.sessions.write().await;

        match sessions.get(&handle.user_id) {
            Some(s) if s.generation == handle.generation => {}
            _ => return Err(CommandError::Timeout(InteractiveFlow::EmbedBuilder)),
        }

        sessions
            .remove(&handle.user_id)
            .map(|s| FinishedEmbed {
                channel_id: s.channel_id,
                draft: s.draft,
            })
            .ok_or(CommandError::Timeout(InteractiveFlow::EmbedBuilder))
    }

    /// Drops the session if it still belongs to this generation.
    pub async fn end(&self, handle: SessionHandle) {
        let mut sessions = self.sessions.write().await;

        if sessions
            .get(&handle.user_id)
            .is_some_and(|s| s.generation == handle.generation)
        {
            sessions.remove(&handle.user_id);
        }
    }
}

/// Customizations offered in the preview's select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedOption {
    Footer,
    Author,
    Image,
    Thumbnail,
    Submit,
}

impl EmbedOption {
    pub const ALL: [EmbedOption; 5] = [
        Self::Footer,
        Self::Author,
        Self::Image,
        Self::Thumbnail,
        Self::Submit,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::Footer => "footer",
            Self::Author => "author",
            Self::Image => "image",
            Self::Thumbnail => "thumbnail",
            Self::Submit => "submit",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Footer => "Add Footer",
            Self::Author => "Add Author",
            Self::Image => "Add Image",
            Self::Thumbnail => "Add Thumbnail",
            Self::Submit => "Submit Embed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Footer => "Add a footer to your embed",
            Self::Author => "Add an author to your embed",
            Self::Image => "Add a main image to your embed",
            Self::Thumbnail => "Add a thumbnail image to your embed",
            Self::Submit => "Post the embed in the channel",
        }
    }

    /// Label of the single text input asked for by this option, `None` for submit.
    pub fn input_label(self) -> Option<&'static str> {
        match self {
            Self::Footer => Some("Footer Text"),
            Self::Author => Some("Author Name"),
            Self::Image => Some("Image URL"),
            Self::Thumbnail => Some("Thumbnail URL"),
            Self::Submit => None,
        }
    }

    /// Writes the submitted value into the draft.
    ///
    /// Image and thumbnail values must be http(s) URLs.
    pub fn apply(self, draft: DisplayUnit, value: &str) -> Result<DisplayUnit, CommandError> {
        let value = value.trim();

        match self {
            Self::Footer => Ok(draft.footer(value)),
            Self::Author => Ok(draft.author(value, None)),
            Self::Image | Self::Thumbnail if !is_embed_url(value) => Err(
                CommandError::precondition("Error: Please provide a valid http(s) URL."),
            ),
            Self::Image => Ok(draft.image(value)),
            Self::Thumbnail => Ok(draft.thumbnail(value)),
            Self::Submit => Ok(draft),
        }
    }
}

/// Builds the initial draft from the first modal.
///
/// # Returns
/// - `Ok(DisplayUnit)` - Draft with colour, title, content and the current time
/// - `Err(CommandError::Precondition)` - Colour is not a hex value
pub fn initial_draft(color: &str, title: &str, content: &str) -> Result<DisplayUnit, CommandError> {
    let color = parse_hex_color(color).ok_or_else(|| {
        CommandError::precondition("Error: Invalid color. Use a hex value like #9600ff.")
    })?;

    Ok(DisplayUnit::new()
        .title(title)
        .description(content)
        .color(color)
        .timestamp(Utc::now()))
}
