//! Closing bug report and suggestion threads with an outcome.
//!
//! Both review kinds work on a thread started from a feature post: the starter's embed is
//! rebuilt with every existing field kept plus an outcome field, recoloured, and written
//! back before the thread is locked and archived. A closed thread cannot be reopened
//! through the bot.

use chrono::Utc;
use serenity::all::ChannelId;

use crate::{
    config::settings::Settings,
    error::command::CommandError,
    model::{
        display::{DisplayUnit, MAX_FIELD_VALUE_CHARS},
        member::{Invoker, UserRef},
        moderation::{ModerationAction, ModerationRecord, ModerationTarget},
        platform::{ThreadLookup, ThreadStarter},
    },
    service::{auth::require_moderator, gateway::ModerationGateway, log::ModerationLog},
    util::{
        discord::{timestamp_tag, user_mention},
        parse::truncate_chars,
    },
};

const POSITIVE_OUTCOME_COLOR: u32 = 0x23b955;
const NEGATIVE_OUTCOME_COLOR: u32 = 0xe10600;

/// Moderator decision on a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionDecision {
    Accept,
    Deny,
}

impl SuggestionDecision {
    fn past_tense(self) -> &'static str {
        match self {
            Self::Accept => "accepted",
            Self::Deny => "denied",
        }
    }
}

/// Which feature channel a review applies to, with its user-facing wording.
#[derive(Debug, Clone, Copy)]
enum ReviewKind {
    BugReport,
    Suggestion,
}

impl ReviewKind {
    fn noun(self) -> &'static str {
        match self {
            Self::BugReport => "bug report",
            Self::Suggestion => "suggestion",
        }
    }

    fn channel(self, settings: &Settings) -> Option<ChannelId> {
        match self {
            Self::BugReport => settings.bug_report.channel,
            Self::Suggestion => settings.suggestions.channel,
        }
    }
}

/// The embed change applied when a thread is closed.
struct Outcome {
    marker: &'static str,
    verb: &'static str,
    color: u32,
    reason: Option<String>,
}

pub struct ReviewService<'a, G: ModerationGateway> {
    gateway: &'a G,
    settings: &'a Settings,
}

impl<'a, G: ModerationGateway> ReviewService<'a, G> {
    pub fn new(gateway: &'a G, settings: &'a Settings) -> Self {
        Self { gateway, settings }
    }

    /// Marks the bug report behind the current thread as resolved.
    ///
    /// # Arguments
    /// - `invoker` - Member running the command
    /// - `channel_id` - Channel the command was invoked in
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation for the moderator
    /// - `Err(CommandError::Precondition)` - Not a bug report thread, or its starter or
    ///   embed is gone
    /// - `Err(CommandError::Unauthorized)`, `Configuration`, `PlatformAction`
    pub async fn resolve_bug(
        &self,
        invoker: &Invoker,
        channel_id: ChannelId,
    ) -> Result<String, CommandError> {
        let outcome = Outcome {
            marker: "✅",
            verb: "Resolved",
            color: POSITIVE_OUTCOME_COLOR,
            reason: None,
        };

        self.close(invoker, channel_id, ReviewKind::BugReport, outcome)
            .await?;

        Ok("Bug report has been marked as resolved and the thread will be locked.".to_string())
    }

    /// Accepts or denies the suggestion behind the current thread.
    pub async fn decide_suggestion(
        &self,
        invoker: &Invoker,
        channel_id: ChannelId,
        decision: SuggestionDecision,
        reason: &str,
    ) -> Result<String, CommandError> {
        let outcome = match decision {
            SuggestionDecision::Accept => Outcome {
                marker: "✅",
                verb: "Accepted",
                color: POSITIVE_OUTCOME_COLOR,
                reason: Some(reason.to_string()),
            },
            SuggestionDecision::Deny => Outcome {
                marker: "❌",
                verb: "Denied",
                color: NEGATIVE_OUTCOME_COLOR,
                reason: Some(reason.to_string()),
            },
        };

        self.close(invoker, channel_id, ReviewKind::Suggestion, outcome)
            .await?;

        Ok(format!(
            "Suggestion has been {} and the thread will be locked.",
            decision.past_tense()
        ))
    }

    async fn close(
        &self,
        invoker: &Invoker,
        channel_id: ChannelId,
        kind: ReviewKind,
        outcome: Outcome,
    ) -> Result<(), CommandError> {
        require_moderator(invoker, self.settings)?;

        let starter = self.qualifying_starter(channel_id, kind).await?;
        let Some(display) = starter.display.clone() else {
            return Err(CommandError::precondition(format!(
                "Could not find the {} embed.",
                kind.noun()
            )));
        };

        let log = ModerationLog::resolve(self.gateway, self.settings).await?;

        let now = Utc::now();
        let updated = with_outcome(display, &outcome, &invoker.user, now);

        self.gateway
            .edit_display(starter.parent_id, starter.message_id, &updated)
            .await?;
        self.gateway.close_thread(starter.thread_id).await?;
        tracing::info!(
            "{} closed {} thread {} as {}",
            invoker.user.name,
            kind.noun(),
            starter.thread_id,
            outcome.verb
        );

        log.post(&ModerationRecord {
            action: ModerationAction::Other(outcome_label(kind, outcome.verb)),
            actor: invoker.user.clone(),
            target: ModerationTarget::Channel {
                id: starter.thread_id,
                name: starter.thread_name.clone(),
            },
            reason: outcome
                .reason
                .clone()
                .unwrap_or_else(|| format!("Closed {} thread", kind.noun())),
            timestamp: now,
        })
        .await;

        Ok(())
    }

    /// Finds the starter post, requiring a thread under the kind's feature channel.
    async fn qualifying_starter(
        &self,
        channel_id: ChannelId,
        kind: ReviewKind,
    ) -> Result<ThreadStarter, CommandError> {
        let outside_thread = || {
            CommandError::precondition(format!(
                "This command can only be used in {} threads.",
                kind.noun()
            ))
        };

        let Some(feature_channel) = kind.channel(self.settings) else {
            return Err(CommandError::Configuration(format!(
                "The {} channel is not configured",
                kind.noun()
            )));
        };

        match self.gateway.thread_starter(channel_id).await? {
            ThreadLookup::NotThread => Err(outside_thread()),
            ThreadLookup::StarterMissing => Err(CommandError::precondition(format!(
                "Could not find the original {} message.",
                kind.noun()
            ))),
            ThreadLookup::Found(starter) if starter.parent_id != feature_channel => {
                Err(outside_thread())
            }
            ThreadLookup::Found(starter) => Ok(starter),
        }
    }
}

fn with_outcome(
    display: DisplayUnit,
    outcome: &Outcome,
    moderator: &UserRef,
    now: chrono::DateTime<Utc>,
) -> DisplayUnit {
    const REASON_PREFIX: &str = "\n**Reason:** ";

    let mut value = format!("**By:** {}", user_mention(moderator.id.get()));
    let when = format!("\n**When:** {}", timestamp_tag(now, 'R'));
    if let Some(reason) = &outcome.reason {
        // The reason gets whatever the field limit leaves after the fixed lines
        let budget = MAX_FIELD_VALUE_CHARS.saturating_sub(
            value.chars().count() + REASON_PREFIX.chars().count() + when.chars().count(),
        );
        value.push_str(REASON_PREFIX);
        value.push_str(&truncate_chars(reason, budget));
    }
    value.push_str(&when);

    display
        .color(outcome.color)
        .field(format!("{} {}", outcome.marker, outcome.verb), value, false)
}

fn outcome_label(kind: ReviewKind, verb: &str) -> String {
    match kind {
        ReviewKind::BugReport => format!("Bug {}", verb),
        ReviewKind::Suggestion => format!("Suggestion {}", verb),
    }
}
