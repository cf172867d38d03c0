//! `/bug`: bug report intake through a modal built from the configured questions.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse, InputTextStyle,
};

use crate::{
    bot::{
        command::{
            modal::{self, TextField},
            reply::{self, CommandReply},
        },
        gateway::SerenityGateway,
        state::BotState,
    },
    config::settings::{BugQuestion, QuestionStyle},
    error::command::{CommandError, InteractiveFlow},
    model::member::UserRef,
    service::intake::{BugAnswer, IntakeService, Submitter},
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("bug").description("Report a bug")
}

/// One input per configured question, capped so each answer fits an embed field.
fn question_fields<'a>(
    questions: &'a [BugQuestion],
    custom_ids: &'a [String],
) -> Vec<TextField<'a>> {
    questions
        .iter()
        .zip(custom_ids)
        .map(|(question, custom_id)| TextField {
            custom_id,
            label: &question.label,
            placeholder: question.placeholder.as_deref(),
            style: match question.style {
                QuestionStyle::Short => InputTextStyle::Short,
                QuestionStyle::Paragraph => InputTextStyle::Paragraph,
            },
            required: question.required,
            max_length: Some(modal::FIELD_VALUE_INPUT_LEN),
        })
        .collect()
}

pub async fn run(
    ctx: &Context,
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let questions = &state.settings.bug_report.questions;
    let custom_ids: Vec<String> = questions.iter().map(|q| q.custom_id()).collect();

    let fields = question_fields(questions, &custom_ids);

    let modal_id = format!("bug_report:{}", command.id);
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(modal::build(&modal_id, "Report a Bug", &fields)),
        )
        .await?;

    let Some(submission) =
        modal::await_submission(ctx, command.user.id, &modal_id, modal::SUBMISSION_TIMEOUT).await
    else {
        tracing::info!("Bug report from {} timed out", command.user.name);
        reply::follow_up(ctx, command, InteractiveFlow::BugReport.expiry_message()).await;
        return Ok(CommandReply::Handled);
    };

    if let Err(e) = submission.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to acknowledge bug report submission: {}", e);
        return Ok(CommandReply::Handled);
    }

    let mut values = modal::submitted_values(&submission);
    let answers: Vec<BugAnswer> = questions
        .iter()
        .zip(&custom_ids)
        .filter_map(|(question, custom_id)| {
            values.remove(custom_id).map(|value| BugAnswer {
                label: question.label.clone(),
                value,
            })
        })
        .collect();

    let submitter = Submitter {
        user: UserRef::from(&command.user),
        avatar_url: command.user.face(),
    };
    let result = IntakeService::new(gateway, &state.settings)
        .submit_bug_report(&submitter, &answers)
        .await;

    reply::finish_modal(ctx, &submission, "bug", result).await;

    Ok(CommandReply::Handled)
}
