//! Turning command results into interaction responses.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse, ModalInteraction,
};

use crate::{error::command::CommandError, model::display::DisplayUnit};

/// What a command handler wants sent back to the invoker.
pub enum CommandReply {
    Private(String),
    PrivateEmbed(DisplayUnit),
    /// The handler already responded, as modal flows do.
    Handled,
}

/// Sends the command's reply, converting errors to their user message.
///
/// Deferred commands already acknowledged the interaction, so their reply edits the
/// deferred response instead of creating one.
pub async fn finish(
    ctx: &Context,
    command: &CommandInteraction,
    deferred: bool,
    result: Result<CommandReply, CommandError>,
) {
    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            log_command_error(&command.data.name, &e);
            CommandReply::Private(e.user_message())
        }
    };

    let sent = match reply {
        CommandReply::Handled => return,
        CommandReply::Private(text) if deferred => command
            .edit_response(&ctx.http, EditInteractionResponse::new().content(text))
            .await
            .map(|_| ()),
        CommandReply::PrivateEmbed(display) if deferred => command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().embed(display.to_embed()),
            )
            .await
            .map(|_| ()),
        CommandReply::Private(text) => {
            command
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(text)
                            .ephemeral(true),
                    ),
                )
                .await
        }
        CommandReply::PrivateEmbed(display) => {
            command
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .embed(display.to_embed())
                            .ephemeral(true),
                    ),
                )
                .await
        }
    };

    if let Err(e) = sent {
        tracing::error!("Failed to reply to /{}: {}", command.data.name, e);
    }
}

/// Sends a private follow-up after the initial response was used for a modal.
pub async fn follow_up(ctx: &Context, command: &CommandInteraction, text: &str) {
    if let Err(e) = command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(text)
                .ephemeral(true),
        )
        .await
    {
        tracing::error!("Failed to send follow-up for /{}: {}", command.data.name, e);
    }
}

/// Logs a failed command at a level matching how unexpected the failure is.
pub fn log_command_error(command_name: &str, error: &CommandError) {
    match error {
        CommandError::Unauthorized | CommandError::Precondition(_) => {
            tracing::debug!("/{} refused: {}", command_name, error)
        }
        CommandError::Timeout(_) => tracing::info!("/{} expired: {}", command_name, error),
        CommandError::Configuration(_) | CommandError::PlatformAction(_) => {
            tracing::warn!("/{} failed: {}", command_name, error)
        }
        CommandError::Persistence(e) => {
            tracing::error!("/{} database error: {:?}", command_name, e)
        }
    }
}

/// Replies to a modal submission that was deferred while its work ran.
pub async fn finish_modal(
    ctx: &Context,
    modal: &ModalInteraction,
    command_name: &str,
    result: Result<String, CommandError>,
) {
    let text = result.unwrap_or_else(|e| {
        log_command_error(command_name, &e);
        e.user_message()
    });

    if let Err(e) = modal
        .edit_response(&ctx.http, EditInteractionResponse::new().content(text))
        .await
    {
        tracing::error!("Failed to reply to /{} submission: {}", command_name, e);
    }
}
