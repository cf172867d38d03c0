//! Posting bug reports and suggestions submitted through modals.
//!
//! Each submission becomes an embed in its feature channel with a discussion thread
//! started from it. The feature channel is checked before anything is posted.

use chrono::Utc;
use serenity::all::ChannelId;

use crate::{
    config::settings::Settings,
    error::command::CommandError,
    model::{
        display::{DisplayUnit, MAX_TITLE_CHARS},
        member::UserRef,
    },
    service::gateway::ModerationGateway,
    util::{discord::user_mention, parse::truncate_chars},
};

/// Discord caps thread names at 100 characters.
const MAX_THREAD_NAME_CHARS: usize = 100;

/// The member submitting a report, with the avatar shown as the embed author icon.
#[derive(Debug, Clone)]
pub struct Submitter {
    pub user: UserRef,
    pub avatar_url: String,
}

/// One answered question from the bug report modal.
#[derive(Debug, Clone)]
pub struct BugAnswer {
    pub label: String,
    pub value: String,
}

pub struct IntakeService<'a, G: ModerationGateway> {
    gateway: &'a G,
    settings: &'a Settings,
}

impl<'a, G: ModerationGateway> IntakeService<'a, G> {
    pub fn new(gateway: &'a G, settings: &'a Settings) -> Self {
        Self { gateway, settings }
    }

    /// Posts a bug report and opens its thread.
    ///
    /// Answers left blank are omitted from the embed. The thread is named after the
    /// submitter and receives an intro message mentioning them.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation for the submitter
    /// - `Err(CommandError::Configuration)` - Bug report channel missing
    /// - `Err(CommandError::PlatformAction)` - Posting or thread creation failed
    pub async fn submit_bug_report(
        &self,
        submitter: &Submitter,
        answers: &[BugAnswer],
    ) -> Result<String, CommandError> {
        let channel_id = self
            .feature_channel(self.settings.bug_report.channel, "Bug reports channel")
            .await?;

        let display = bug_report_display(self.settings, submitter, answers);
        let message_id = self.gateway.send_display(channel_id, &display).await?;

        let thread_name = truncate_chars(
            &format!("Bug Report - {}", submitter.user.name),
            MAX_THREAD_NAME_CHARS,
        );
        let thread_id = self
            .gateway
            .start_thread(channel_id, message_id, &thread_name)
            .await?;
        self.gateway
            .send_text(
                thread_id,
                &format!(
                    "Bug report created by {}. Staff will review this report soon.\n\nYou can attach files and embed links in this thread to provide additional information.",
                    user_mention(submitter.user.id.get())
                ),
            )
            .await?;
        tracing::info!("{} submitted a bug report", submitter.user.name);

        Ok("Your bug report has been submitted successfully! You can track it in the bug reports channel.".to_string())
    }

    /// Posts a suggestion, adds the vote reactions and opens its discussion thread.
    pub async fn submit_suggestion(
        &self,
        submitter: &Submitter,
        title: &str,
        content: &str,
    ) -> Result<String, CommandError> {
        let channel_id = self
            .feature_channel(self.settings.suggestions.channel, "Suggestions channel")
            .await?;

        let display = suggestion_display(self.settings, submitter, title, content);
        let message_id = self.gateway.send_display(channel_id, &display).await?;

        let reactions = &self.settings.suggestions.reactions;
        self.gateway
            .react(channel_id, message_id, &reactions.upvote)
            .await?;
        self.gateway
            .react(channel_id, message_id, &reactions.downvote)
            .await?;

        let thread_name = truncate_chars(&format!("Discussion: {}", title), MAX_THREAD_NAME_CHARS);
        let thread_id = self
            .gateway
            .start_thread(channel_id, message_id, &thread_name)
            .await?;
        self.gateway
            .send_text(
                thread_id,
                &format!(
                    "Suggestion created by {}. Use this thread to discuss the suggestion!\n\nYou can attach files and embed links in this thread to provide additional information.",
                    user_mention(submitter.user.id.get())
                ),
            )
            .await?;
        tracing::info!("{} submitted suggestion '{}'", submitter.user.name, title);

        Ok("Your suggestion has been submitted successfully! You can track it in the suggestions channel.".to_string())
    }

    async fn feature_channel(
        &self,
        channel_id: Option<ChannelId>,
        name: &str,
    ) -> Result<ChannelId, CommandError> {
        let not_found = || CommandError::Configuration(format!("{} not found", name));

        let channel_id = channel_id.ok_or_else(not_found)?;
        if !self.gateway.channel_exists(channel_id).await? {
            return Err(not_found());
        }

        Ok(channel_id)
    }
}

fn bug_report_display(
    settings: &Settings,
    submitter: &Submitter,
    answers: &[BugAnswer],
) -> DisplayUnit {
    let mut display = DisplayUnit::new()
        .title("🐛 New Bug Report")
        .color(settings.bug_report.color)
        .author(&submitter.user.name, Some(submitter.avatar_url.clone()))
        .timestamp(Utc::now());

    for answer in answers.iter().filter(|a| !a.value.trim().is_empty()) {
        display = display.field(&answer.label, &answer.value, false);
    }

    display
}

fn suggestion_display(
    settings: &Settings,
    submitter: &Submitter,
    title: &str,
    content: &str,
) -> DisplayUnit {
    DisplayUnit::new()
        .title(truncate_chars(&format!("💡 {}", title), MAX_TITLE_CHARS))
        .description(content)
        .color(settings.suggestions.color)
        .author(&submitter.user.name, Some(submitter.avatar_url.clone()))
        .footer("React with +1 or -1 to vote on this suggestion")
        .timestamp(Utc::now())
}
