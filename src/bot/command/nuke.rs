use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};

use crate::{
    bot::{
        command::{invoker, options::CommandOptions, reply::CommandReply},
        gateway::SerenityGateway,
        state::BotState,
    },
    config::settings::Settings,
    error::command::CommandError,
    service::moderation::{ModerationService, NukeTarget},
};

pub fn definition(settings: &Settings) -> CreateCommand {
    let max = settings.nuke.max_messages;

    CreateCommand::new("nuke")
        .description("Bulk delete messages in the channel")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                format!("Number of messages to delete (max {})", max),
            )
            .min_int_value(1)
            .max_int_value(u64::from(max)),
        )
}

pub async fn run(
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let options = CommandOptions::resolve(command);
    let amount = options.optional_integer("amount");

    let name = command
        .channel
        .as_ref()
        .and_then(|channel| channel.name.clone())
        .unwrap_or_else(|| command.channel_id.to_string());
    let target = NukeTarget {
        channel_id: command.channel_id,
        name,
    };

    let reply = ModerationService::new(gateway, &state.settings)
        .nuke(&invoker(command), &target, amount)
        .await?;

    Ok(CommandReply::Private(reply))
}
