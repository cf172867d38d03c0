//! Guild settings loaded from YAML.
//!
//! The settings are an immutable snapshot for the lifetime of the process. They are read
//! once in `startup::load_settings` and shared as `Arc<Settings>`.
//!
//! ```yaml
//! roles:
//!   moderator: "111111111111111111"
//! channels:
//!   logs: "222222222222222222"
//! bug_report:
//!   channel: "333333333333333333"
//!   color: "#ff5555"
//!   questions:
//!     - label: Summary
//!       placeholder: What went wrong?
//!       style: short
//! suggestions:
//!   channel: "444444444444444444"
//!   color: "#9600ff"
//!   reactions:
//!     upvote: "👍"
//!     downvote: "👎"
//! ```

use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use serenity::all::{ChannelId, ReactionType, RoleId};

use crate::{
    error::settings::SettingsError,
    util::parse::{custom_id_for_label, deserialize_hex_color, deserialize_reaction},
};

/// Discord allows at most five rows in a modal.
const MAX_MODAL_QUESTIONS: usize = 5;
/// Discord caps text input labels at 45 characters.
const MAX_QUESTION_LABEL_LEN: usize = 45;
/// Discord's bulk delete endpoint accepts at most 100 messages.
pub const PLATFORM_BULK_DELETE_LIMIT: u8 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub roles: RoleSettings,
    #[serde(default)]
    pub channels: ChannelSettings,
    pub bug_report: BugReportSettings,
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub nuke: NukeSettings,
    #[serde(default)]
    pub status: StatusSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleSettings {
    /// Members holding this role may use every moderation command.
    pub moderator: RoleId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelSettings {
    /// Destination for moderation log embeds.
    pub logs: Option<ChannelId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BugReportSettings {
    pub channel: Option<ChannelId>,
    #[serde(deserialize_with = "deserialize_hex_color")]
    pub color: u32,
    pub questions: Vec<BugQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BugQuestion {
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub style: QuestionStyle,
}

impl BugQuestion {
    /// Modal input id derived from the label.
    pub fn custom_id(&self) -> String {
        custom_id_for_label(&self.label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStyle {
    #[default]
    Short,
    Paragraph,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    pub channel: Option<ChannelId>,
    #[serde(deserialize_with = "deserialize_hex_color")]
    pub color: u32,
    pub reactions: VoteReactions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoteReactions {
    #[serde(deserialize_with = "deserialize_reaction")]
    pub upvote: ReactionType,
    #[serde(deserialize_with = "deserialize_reaction")]
    pub downvote: ReactionType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NukeSettings {
    #[serde(default = "default_nuke_max")]
    pub max_messages: u8,
}

impl Default for NukeSettings {
    fn default() -> Self {
        Self {
            max_messages: PLATFORM_BULK_DELETE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusSettings {
    #[serde(default = "default_status_interval")]
    pub interval_secs: u64,
    #[serde(default = "default_status_entries")]
    pub entries: Vec<StatusEntry>,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_status_interval(),
            entries: default_status_entries(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusEntry {
    pub text: String,
    #[serde(default)]
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Playing,
    #[default]
    Watching,
    Listening,
    Competing,
    Custom,
}

fn default_true() -> bool {
    true
}

fn default_nuke_max() -> u8 {
    PLATFORM_BULK_DELETE_LIMIT
}

fn default_status_interval() -> u64 {
    60
}

fn default_status_entries() -> Vec<StatusEntry> {
    vec![StatusEntry {
        text: "mcrep.gg".to_string(),
        kind: StatusKind::Watching,
    }]
}

impl Settings {
    /// Reads, parses and validates the settings file.
    ///
    /// # Arguments
    /// - `path` - Location of the YAML settings file
    ///
    /// # Returns
    /// - `Ok(Settings)` - Validated settings snapshot
    /// - `Err(SettingsError::Read)` - File missing or unreadable
    /// - `Err(SettingsError::Parse)` - Not valid YAML or wrong shape
    /// - `Err(SettingsError::Invalid)` - A value violates a Discord or bot limit
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_yaml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let questions = &self.bug_report.questions;
        if questions.is_empty() || questions.len() > MAX_MODAL_QUESTIONS {
            return Err(SettingsError::Invalid(format!(
                "bug_report.questions must contain between 1 and {} entries, found {}",
                MAX_MODAL_QUESTIONS,
                questions.len()
            )));
        }

        let mut seen = HashSet::new();
        for question in questions {
            if question.label.trim().is_empty()
                || question.label.chars().count() > MAX_QUESTION_LABEL_LEN
            {
                return Err(SettingsError::Invalid(format!(
                    "bug_report question label '{}' must be 1 to {} characters",
                    question.label, MAX_QUESTION_LABEL_LEN
                )));
            }
            if !seen.insert(question.custom_id()) {
                return Err(SettingsError::Invalid(format!(
                    "bug_report question label '{}' duplicates another question",
                    question.label
                )));
            }
        }

        if self.nuke.max_messages == 0 || self.nuke.max_messages > PLATFORM_BULK_DELETE_LIMIT {
            return Err(SettingsError::Invalid(format!(
                "nuke.max_messages must be between 1 and {}",
                PLATFORM_BULK_DELETE_LIMIT
            )));
        }

        if self.status.entries.is_empty() {
            return Err(SettingsError::Invalid(
                "status.entries must not be empty".to_string(),
            ));
        }
        if self.status.interval_secs == 0 {
            return Err(SettingsError::Invalid(
                "status.interval_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
