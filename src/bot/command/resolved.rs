use serenity::all::{CommandInteraction, CreateCommand, Permissions};

use crate::{
    bot::{
        command::{invoker, reply::CommandReply},
        gateway::SerenityGateway,
        state::BotState,
    },
    error::command::CommandError,
    service::review::ReviewService,
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("resolved")
        .description("Mark a bug report as resolved")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
}

pub async fn run(
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let reply = ReviewService::new(gateway, &state.settings)
        .resolve_bug(&invoker(command), command.channel_id)
        .await?;

    Ok(CommandReply::Private(reply))
}
