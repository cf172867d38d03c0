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
    model::member::UserRef,
    service::moderation::ModerationService,
};

pub fn definition() -> CreateCommand {
    CreateCommand::new("warn")
        .description("Warn a user")
        .default_member_permissions(Permissions::MODERATE_MEMBERS)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to warn")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "The reason for the warning",
            )
            .required(true)
            .max_length(MAX_TEXT_OPTION_LEN),
        )
}

pub async fn run(
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let options = CommandOptions::resolve(command);
    let target = UserRef::from(options.user("user")?);
    let reason = options.string("reason")?;

    let reply = ModerationService::new(gateway, &state.settings)
        .warn(&invoker(command), &target, reason)
        .await?;

    Ok(CommandReply::Private(reply))
}
