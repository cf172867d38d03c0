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
    service::note::{NoteService, NotesView},
};

fn user_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
}

pub fn definition() -> CreateCommand {
    CreateCommand::new("notes")
        .description("Manage notes for users")
        .default_member_permissions(Permissions::MODERATE_MEMBERS)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Add a note to a user")
                .add_sub_option(user_option("The user to add a note to"))
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::String, "note", "The note content")
                        .required(true)
                        .max_length(MAX_TEXT_OPTION_LEN),
                ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "remove",
                "Remove a note from a user",
            )
            .add_sub_option(user_option("The user to remove a note from"))
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "note_id",
                    "The ID of the note to remove",
                )
                .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "view", "View notes for a user")
                .add_sub_option(user_option("The user to view notes for")),
        )
}

pub async fn run(
    state: &BotState,
    gateway: &SerenityGateway,
    command: &CommandInteraction,
) -> Result<CommandReply, CommandError> {
    let options = CommandOptions::resolve(command);
    let user = options.user("user")?;
    let subject = UserRef::from(user);
    let invoker = invoker(command);
    let service = NoteService::new(&state.db, gateway, &state.settings);

    match options.subcommand {
        Some("add") => {
            let content = options.string("note")?;
            let reply = service.add(&invoker, &subject, content).await?;
            Ok(CommandReply::Private(reply))
        }
        Some("remove") => {
            let note_id = options.string("note_id")?;
            let reply = service.remove(&invoker, &subject, note_id).await?;
            Ok(CommandReply::Private(reply))
        }
        Some("view") => match service.view(&invoker, &subject, user.face()).await? {
            NotesView::Empty(reply) => Ok(CommandReply::Private(reply)),
            NotesView::Listing(display) => Ok(CommandReply::PrivateEmbed(display)),
        },
        _ => Err(CommandError::precondition("Error: Unknown notes subcommand.")),
    }
}
