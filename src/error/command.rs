use thiserror::Error;

use crate::error::platform::PlatformError;

/// Multi-step flows that wait on further input from the invoking user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveFlow {
    BugReport,
    Suggestion,
    EmbedBuilder,
}

impl InteractiveFlow {
    /// Message shown when the flow's wait bound elapses.
    pub fn expiry_message(self) -> &'static str {
        match self {
            Self::BugReport => "Bug report submission timed out. Please try again.",
            Self::Suggestion => "Suggestion submission timed out. Please try again.",
            Self::EmbedBuilder => "Embed session expired. Please create a new embed.",
        }
    }
}

impl std::fmt::Display for InteractiveFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::BugReport => "bug report",
            Self::Suggestion => "suggestion",
            Self::EmbedBuilder => "embed builder",
        };
        f.write_str(name)
    }
}

/// Failure of a single slash-command invocation.
///
/// Every variant ends as a private reply to the invoker; none are retried. Handlers
/// return authorization, precondition and configuration failures before performing any
/// side effect, so those never leave a log entry behind.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Caller holds neither the moderator role nor Administrator.
    #[error("caller is not a moderator")]
    Unauthorized,

    /// An action-specific condition does not hold.
    ///
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Precondition(String),

    /// A required channel or setting is missing.
    #[error("{0}")]
    Configuration(String),

    /// The platform rejected the side effect.
    #[error(transparent)]
    PlatformAction(#[from] PlatformError),

    /// The note store is unreachable or rejected the write.
    ///
    /// The operation is treated as not having happened.
    #[error(transparent)]
    Persistence(#[from] sea_orm::DbErr),

    /// Follow-up input from the user never arrived.
    #[error("{0} timed out")]
    Timeout(InteractiveFlow),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::PlatformAction(PlatformError::from(err))
    }
}

impl CommandError {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Converts the error into the private reply shown to the invoker.
    ///
    /// Persistence failures return a generic message so database details never reach
    /// Discord; they are logged at the interaction boundary instead.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "You do not have permission to use this command.".to_string(),
            Self::Precondition(message) => message.clone(),
            Self::Configuration(message) => {
                format!("Error: {}. Please check the configuration.", message)
            }
            Self::PlatformAction(err) => err.user_message(),
            Self::Persistence(_) => {
                "There was an error while executing this command. Please try again later."
                    .to_string()
            }
            Self::Timeout(flow) => flow.expiry_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that database details are not leaked to the user.
    ///
    /// Expected: generic message without the DbErr text
    #[test]
    fn persistence_message_is_generic() {
        let err = CommandError::Persistence(sea_orm::DbErr::Custom("disk I/O error".to_string()));

        let message = err.user_message();

        assert!(!message.contains("disk"));
        assert!(message.contains("try again later"));
    }

    /// Tests that timeouts are distinguishable from generic failures.
    ///
    /// Expected: flow-specific expiry message
    #[test]
    fn timeout_uses_expiry_message() {
        let err = CommandError::Timeout(InteractiveFlow::EmbedBuilder);

        assert_eq!(
            err.user_message(),
            "Embed session expired. Please create a new embed."
        );
    }

    /// Tests configuration message formatting.
    ///
    /// Expected: message wrapped with the configuration hint
    #[test]
    fn configuration_message() {
        let err = CommandError::Configuration("Logs channel not found".to_string());

        assert_eq!(
            err.user_message(),
            "Error: Logs channel not found. Please check the configuration."
        );
    }
}
