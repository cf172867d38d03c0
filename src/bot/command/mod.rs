//! Slash command definitions and routing.
//!
//! Each command lives in its own module with a `definition` used at registration and a
//! `run` that turns the interaction into service calls. Services never see serenity
//! interaction types; commands extract options and hand over plain values.

pub mod ban;
pub mod bug;
pub mod embed;
pub mod kick;
pub mod modal;
pub mod notes;
pub mod nuke;
pub mod options;
pub mod reply;
pub mod resolved;
pub mod suggestion;
pub mod suggestions;
pub mod warn;

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::{command::reply::CommandReply, gateway::SerenityGateway, state::BotState},
    config::settings::Settings,
    model::member::Invoker,
};

/// Reason and note text is capped so log embeds stay within Discord's field limits.
pub const MAX_TEXT_OPTION_LEN: u16 = 1000;

/// Commands that call Discord several times before replying and so defer first.
const DEFERRED_COMMANDS: [&str; 3] = ["nuke", "resolved", "suggestions"];

/// Builds every command registered in the guild.
pub fn definitions(settings: &Settings) -> Vec<CreateCommand> {
    vec![
        ban::definition(),
        kick::definition(),
        warn::definition(),
        notes::definition(),
        nuke::definition(settings),
        resolved::definition(),
        suggestions::definition(),
        bug::definition(),
        suggestion::definition(),
        embed::definition(),
    ]
}

/// Routes a slash command to its handler and sends the reply.
pub async fn dispatch(ctx: &Context, state: &BotState, command: &CommandInteraction) {
    let name = command.data.name.as_str();
    tracing::debug!("/{} invoked by {}", name, command.user.name);

    let deferred = DEFERRED_COMMANDS.contains(&name);
    if deferred {
        if let Err(e) = command.defer_ephemeral(&ctx.http).await {
            tracing::error!("Failed to defer /{}: {}", name, e);
            return;
        }
    }

    let gateway = gateway_for(ctx, state);

    let result = match name {
        "ban" => ban::run(state, &gateway, command).await,
        "kick" => kick::run(state, &gateway, command).await,
        "warn" => warn::run(state, &gateway, command).await,
        "notes" => notes::run(state, &gateway, command).await,
        "nuke" => nuke::run(state, &gateway, command).await,
        "resolved" => resolved::run(state, &gateway, command).await,
        "suggestions" => suggestions::run(state, &gateway, command).await,
        "bug" => bug::run(ctx, state, &gateway, command).await,
        "suggestion" => suggestion::run(ctx, state, &gateway, command).await,
        "embed" => embed::run(ctx, state, &gateway, command).await,
        _ => {
            tracing::warn!("Received unknown command /{}", name);
            Ok(CommandReply::Private(
                "This command is no longer available.".to_string(),
            ))
        }
    };

    reply::finish(ctx, command, deferred, result).await;
}

fn gateway_for(ctx: &Context, state: &BotState) -> SerenityGateway {
    let bot_id = ctx.cache.current_user().id;
    SerenityGateway::new(ctx.http.clone(), state.guild_id, bot_id)
}

fn invoker(command: &CommandInteraction) -> Invoker {
    Invoker::from_interaction(&command.user, command.member.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::tests::sample_settings;

    /// Tests that every routed command is registered exactly once.
    ///
    /// Expected: ten uniquely named definitions
    #[test]
    fn registers_each_command_once() {
        let settings = sample_settings();

        let commands = definitions(&settings);
        let names: Vec<String> = commands
            .iter()
            .filter_map(|c| serde_json::to_value(c).ok())
            .filter_map(|v| v["name"].as_str().map(str::to_string))
            .collect();

        assert_eq!(names.len(), 10);
        for name in [
            "ban",
            "kick",
            "warn",
            "notes",
            "nuke",
            "resolved",
            "suggestions",
            "bug",
            "suggestion",
            "embed",
        ] {
            assert_eq!(names.iter().filter(|n| n.as_str() == name).count(), 1);
        }
    }

    /// Tests that the nuke amount is bounded by the configured maximum.
    ///
    /// Expected: integer option with min 1 and max from settings
    #[test]
    fn nuke_amount_uses_configured_max() {
        let mut settings = sample_settings();
        settings.nuke.max_messages = 50;

        let json = serde_json::to_value(nuke::definition(&settings)).unwrap();
        let amount = &json["options"][0];

        assert_eq!(amount["name"], "amount");
        assert_eq!(amount["min_value"], 1);
        assert_eq!(amount["max_value"], 50);
    }
}
