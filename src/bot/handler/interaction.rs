use serenity::all::{Context, Interaction};

use crate::bot::{command, state::BotState};

/// Routes slash commands to the command dispatcher.
///
/// Component and modal interactions are consumed by the collectors of the command that
/// opened them. Anything reaching this handler belongs to a flow that already timed out,
/// so it is only logged.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            if command.guild_id != Some(state.guild_id) {
                tracing::debug!(
                    "Ignoring /{} from outside guild {}",
                    command.data.name,
                    state.guild_id
                );
                return;
            }

            command::dispatch(&ctx, state, &command).await;
        }
        Interaction::Component(component) => {
            tracing::debug!(
                "Unclaimed component interaction {} from {}",
                component.data.custom_id,
                component.user.name
            );
        }
        Interaction::Modal(modal) => {
            tracing::debug!(
                "Unclaimed modal submission {} from {}",
                modal.data.custom_id,
                modal.user.name
            );
        }
        _ => {}
    }
}
