//! `/embed`: interactive custom embed builder.
//!
//! A modal collects colour, title and content. The moderator then gets a private preview
//! with a select menu; each option opens a one-field modal and re-renders the preview,
//! and submit posts the embed in the invoking channel. The draft lives in the shared
//! `EmbedSessionStore`, so starting a second builder expires the first one.

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionCollector,
    ComponentInteractionDataKind, Context, CreateActionRow, CreateCommand,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, EditInteractionResponse, ModalInteraction, Permissions,
};

use crate::{
    bot::{
        command::{
            invoker,
            modal::{self, TextField},
            reply::{self, CommandReply},
        },
        gateway::SerenityGateway,
        state::BotState,
    },
    error::command::{CommandError, InteractiveFlow},
    model::display::DisplayUnit,
    service::{
        auth::require_moderator,
        embed_session::{initial_draft, EmbedOption, EmbedSessionStore, SessionHandle},
        gateway::ModerationGateway,
    },
};

const COLOR_INPUT: &str = "color";
const TITLE_INPUT: &str = "title";
const CONTENT_INPUT: &str = "content";

pub fn definition() -> CreateCommand {
    CreateCommand::new("embed")
        .description("Create a custom embed message")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
}

pub async fn run(
    ctx: &Context,
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    require_moderator(&invoker(command), &state.settings)?;

    let modal_id = format!("embed:{}", command.id);
    let fields = builder_fields();
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(modal::build(&modal_id, "Create Embed", &fields)),
        )
        .await?;

    let Some(submission) =
        modal::await_submission(ctx, command.user.id, &modal_id, modal::SUBMISSION_TIMEOUT).await
    else {
        tracing::info!("Embed builder for {} timed out", command.user.name);
        reply::follow_up(ctx, command, InteractiveFlow::EmbedBuilder.expiry_message()).await;
        return Ok(CommandReply::Handled);
    };

    let values = modal::submitted_values(&submission);
    let draft = initial_draft(
        values.get(COLOR_INPUT).map_or("", String::as_str),
        values.get(TITLE_INPUT).map_or("", String::as_str),
        values.get(CONTENT_INPUT).map_or("", String::as_str),
    );
    let draft = match draft {
        Ok(draft) => draft,
        Err(e) => {
            respond_private(ctx, &submission, &e.user_message()).await;
            return Ok(CommandReply::Handled);
        }
    };

    let handle = state
        .sessions
        .begin(command.user.id, command.channel_id, draft)
        .await;
    let menu_id = format!("embed_options:{}", command.id);

    let result = customize(ctx, gateway, &state.sessions, handle, &submission, &menu_id).await;
    state.sessions.end(handle).await;

    if let Err(e) = result {
        reply::log_command_error("embed", &e);
        if let Err(e) = submission
            .create_followup(
                &ctx.http,
                CreateInteractionResponseFollowup::new()
                    .content(e.user_message())
                    .ephemeral(true),
            )
            .await
        {
            tracing::error!("Failed to report embed builder failure: {}", e);
        }
    }

    Ok(CommandReply::Handled)
}

/// Runs the preview loop until the embed is posted or the session expires.
async fn customize(
    ctx: &Context,
    gateway: &SerenityGateway,
    sessions: &EmbedSessionStore,
    handle: SessionHandle,
    submission: &ModalInteraction,
    menu_id: &str,
) -> Result<(), CommandError> {
    let draft = sessions.draft(handle).await?;
    submission
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(preview(&draft, menu_id).ephemeral(true)),
        )
        .await?;

    loop {
        let Some(choice) = await_choice(ctx, handle, menu_id).await else {
            expire_preview(ctx, submission).await;
            return Ok(());
        };

        let Some(option) = selected_option(&choice) else {
            choice
                .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
                .await?;
            continue;
        };

        let Some(input_label) = option.input_label() else {
            let finished = match sessions.take(handle).await {
                Ok(finished) => finished,
                Err(_) => return expire_choice(ctx, &choice).await,
            };

            gateway
                .send_display(finished.channel_id, &finished.draft)
                .await?;
            tracing::info!(
                "{} posted a custom embed in {}",
                choice.user.name,
                finished.channel_id
            );

            choice
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::UpdateMessage(
                        CreateInteractionResponseMessage::new()
                            .content("Embed has been posted!")
                            .embeds(vec![])
                            .components(vec![]),
                    ),
                )
                .await?;
            return Ok(());
        };

        if sessions.draft(handle).await.is_err() {
            return expire_choice(ctx, &choice).await;
        }

        let modal_id = format!("{}:{}", menu_id, option.value());
        choice
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Modal(modal::build(
                    &modal_id,
                    option.label(),
                    &[option_field(option, input_label)],
                )),
            )
            .await?;

        let Some(input) =
            modal::await_submission(ctx, handle.user_id, &modal_id, modal::FOLLOW_UP_TIMEOUT)
                .await
        else {
            expire_preview(ctx, submission).await;
            return Ok(());
        };

        let value = modal::submitted_values(&input)
            .remove(option.value())
            .unwrap_or_default();

        match sessions
            .update(handle, |draft| option.apply(draft, &value))
            .await
        {
            Ok(draft) => {
                input
                    .create_response(
                        &ctx.http,
                        CreateInteractionResponse::UpdateMessage(preview(&draft, menu_id)),
                    )
                    .await?
            }
            Err(CommandError::Timeout(flow)) => {
                input
                    .create_response(
                        &ctx.http,
                        CreateInteractionResponse::UpdateMessage(expired_message(flow)),
                    )
                    .await?;
                return Ok(());
            }
            Err(e) => respond_private(ctx, &input, &e.user_message()).await,
        }
    }
}

fn builder_fields() -> [TextField<'static>; 3] {
    [
        TextField::short(COLOR_INPUT, "Embed Color (Hex)").placeholder("#9600ff"),
        TextField::short(TITLE_INPUT, "Embed Title")
            .placeholder("Enter the title for your embed")
            .max_length(modal::TITLE_INPUT_LEN),
        TextField::paragraph(CONTENT_INPUT, "Embed Content")
            .placeholder("Enter the main content for your embed"),
    ]
}

/// The single input for a customization option, capped at the embed part it fills.
fn option_field(option: EmbedOption, label: &str) -> TextField<'_> {
    let field = TextField::short(option.value(), label);
    match option {
        EmbedOption::Footer => field.max_length(modal::FOOTER_INPUT_LEN),
        EmbedOption::Author => field.max_length(modal::AUTHOR_INPUT_LEN),
        EmbedOption::Image | EmbedOption::Thumbnail | EmbedOption::Submit => field,
    }
}

async fn await_choice(
    ctx: &Context,
    handle: SessionHandle,
    menu_id: &str,
) -> Option<ComponentInteraction> {
    let menu_id = menu_id.to_string();

    ComponentInteractionCollector::new(&ctx.shard)
        .author_id(handle.user_id)
        .filter(move |component| component.data.custom_id == menu_id)
        .timeout(modal::FOLLOW_UP_TIMEOUT)
        .next()
        .await
}

fn selected_option(choice: &ComponentInteraction) -> Option<EmbedOption> {
    match &choice.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values
            .first()
            .and_then(|value| EmbedOption::from_value(value)),
        _ => None,
    }
}

fn preview(draft: &DisplayUnit, menu_id: &str) -> CreateInteractionResponseMessage {
    let options = EmbedOption::ALL
        .iter()
        .map(|option| {
            CreateSelectMenuOption::new(option.label(), option.value())
                .description(option.description())
        })
        .collect();
    let menu = CreateSelectMenu::new(menu_id, CreateSelectMenuKind::String { options })
        .placeholder("Customize your embed...");

    CreateInteractionResponseMessage::new()
        .content("Preview of your embed:")
        .embed(draft.to_embed())
        .components(vec![CreateActionRow::SelectMenu(menu)])
}

fn expired_message(flow: InteractiveFlow) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(flow.expiry_message())
        .embeds(vec![])
        .components(vec![])
}

/// Replaces the preview of a session that ran out of time.
async fn expire_preview(ctx: &Context, submission: &ModalInteraction) {
    tracing::info!("Embed builder for {} expired", submission.user.name);

    if let Err(e) = submission
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(InteractiveFlow::EmbedBuilder.expiry_message())
                .embeds(vec![])
                .components(vec![]),
        )
        .await
    {
        tracing::error!("Failed to expire embed preview: {}", e);
    }
}

/// Answers a menu choice made on a preview whose session was replaced.
async fn expire_choice(ctx: &Context, choice: &ComponentInteraction) -> Result<(), CommandError> {
    choice
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(expired_message(
                InteractiveFlow::EmbedBuilder,
            )),
        )
        .await?;

    Ok(())
}

async fn respond_private(ctx: &Context, modal: &ModalInteraction, text: &str) {
    if let Err(e) = modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(text)
                    .ephemeral(true),
            ),
        )
        .await
    {
        tracing::error!("Failed to reply to embed builder input: {}", e);
    }
}
