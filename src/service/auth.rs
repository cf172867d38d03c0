use crate::{config::settings::Settings, error::command::CommandError, model::member::Invoker};

/// Checks that the invoker may use moderation commands.
///
/// Members pass when they hold the configured moderator role or have the Administrator
/// permission.
///
/// # Returns
/// - `Ok(())` - Invoker is a moderator
/// - `Err(CommandError::Unauthorized)` - Invoker is neither moderator nor administrator
pub fn require_moderator(invoker: &Invoker, settings: &Settings) -> Result<(), CommandError> {
    if invoker.administrator || invoker.role_ids.contains(&settings.roles.moderator) {
        return Ok(());
    }

    Err(CommandError::Unauthorized)
}
