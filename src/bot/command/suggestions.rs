use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};

use crate::{
    bot::{
        command::{invoker, options::CommandOptions, reply::CommandReply, MAX_TEXT_OPTION_LEN},
        gateway::SerenityGateway,
        state::BotState,
    },
    error::command::CommandError,
    service::review::{ReviewService, SuggestionDecision},
};

fn decision_option(name: &str, description: &str, reason: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description).add_sub_option(
        CreateCommandOption::new(CommandOptionType::String, "reason", reason)
            .required(true)
            .max_length(MAX_TEXT_OPTION_LEN),
    )
}

pub fn definition() -> CreateCommand {
    CreateCommand::new("suggestions")
        .description("Manage suggestions")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .add_option(decision_option(
            "accept",
            "Accept a suggestion",
            "Reason for accepting the suggestion",
        ))
        .add_option(decision_option(
            "deny",
            "Deny a suggestion",
            "Reason for denying the suggestion",
        ))
}

pub async fn run(
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let options = CommandOptions::resolve(command);
    let decision = match options.subcommand {
        Some("accept") => SuggestionDecision::Accept,
        Some("deny") => SuggestionDecision::Deny,
        _ => {
            return Err(CommandError::precondition(
                "Error: Unknown suggestions subcommand.",
            ))
        }
    };
    let reason = options.string("reason")?;

    let reply = ReviewService::new(gateway, &state.settings)
        .decide_suggestion(&invoker(command), command.channel_id, decision, reason)
        .await?;

    Ok(CommandReply::Private(reply))
}
