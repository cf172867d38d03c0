//! `/suggestion`: suggestion intake through a title and content modal.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateInteractionResponse};

use crate::{
    bot::{
        command::{
            modal::{self, TextField},
            reply::{self, CommandReply},
        },
        gateway::SerenityGateway,
        state::BotState,
    },
    error::command::{CommandError, InteractiveFlow},
    model::member::UserRef,
    service::intake::{IntakeService, Submitter},
};

const TITLE_INPUT: &str = "title";
const CONTENT_INPUT: &str = "content";

pub fn definition() -> CreateCommand {
    CreateCommand::new("suggestion").description("Submit a suggestion")
}

pub async fn run(
    ctx: &Context,
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let modal_id = format!("suggestion:{}", command.id);
    let fields = [
        TextField::short(TITLE_INPUT, "Suggestion Title")
            .placeholder("Enter a brief title for your suggestion"),
        TextField::paragraph(CONTENT_INPUT, "Suggestion Content")
            .placeholder("Describe your suggestion in detail"),
    ];

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(modal::build(
                &modal_id,
                "Submit a Suggestion",
                &fields,
            )),
        )
        .await?;

    let Some(submission) =
        modal::await_submission(ctx, command.user.id, &modal_id, modal::SUBMISSION_TIMEOUT).await
    else {
        tracing::info!("Suggestion from {} timed out", command.user.name);
        reply::follow_up(ctx, command, InteractiveFlow::Suggestion.expiry_message()).await;
        return Ok(CommandReply::Handled);
    };

    if let Err(e) = submission.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to acknowledge suggestion submission: {}", e);
        return Ok(CommandReply::Handled);
    }

    let values = modal::submitted_values(&submission);
    let result = match (values.get(TITLE_INPUT), values.get(CONTENT_INPUT)) {
        (Some(title), Some(content)) => {
            let submitter = Submitter {
                user: UserRef::from(&command.user),
                avatar_url: command.user.face(),
            };
            IntakeService::new(gateway, &state.settings)
                .submit_suggestion(&submitter, title, content)
                .await
        }
        _ => Err(CommandError::precondition(
            "Error: A suggestion needs both a title and content.",
        )),
    };

    reply::finish_modal(ctx, &submission, "suggestion", result).await;

    Ok(CommandReply::Handled)
}
