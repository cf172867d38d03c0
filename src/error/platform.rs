use serenity::http::HttpError;
use thiserror::Error;

/// Discord JSON error code for bulk deleting messages past the age threshold.
const MESSAGES_TOO_OLD: isize = 50034;
/// Discord JSON error codes for missing access or missing permissions.
const MISSING_ACCESS: isize = 50001;
const MISSING_PERMISSIONS: isize = 50013;
/// Discord JSON error codes for unknown channel, member, message and user.
const UNKNOWN_CHANNEL: isize = 10003;
const UNKNOWN_MEMBER: isize = 10007;
const UNKNOWN_MESSAGE: isize = 10008;
const UNKNOWN_USER: isize = 10013;

/// A side-effecting platform call was rejected.
///
/// Known rejection reasons get their own category so the reply can say exactly what went
/// wrong; anything else is carried as `Rejected` with Discord's message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Bulk deletion refused because the messages are older than 14 days.
    #[error("messages older than 14 days cannot be bulk deleted")]
    MessagesTooOld,

    /// The bot lacks the permission or role standing for the action.
    #[error("missing permissions for this action")]
    MissingPermissions,

    /// The user, channel or message no longer exists.
    #[error("unknown target")]
    UnknownTarget,

    /// Any other rejection.
    #[error("{0}")]
    Rejected(String),
}

impl PlatformError {
    /// Maps a Discord JSON error code to a rejection category.
    pub fn from_discord_code(code: isize, message: &str) -> Self {
        match code {
            MESSAGES_TOO_OLD => Self::MessagesTooOld,
            MISSING_ACCESS | MISSING_PERMISSIONS => Self::MissingPermissions,
            UNKNOWN_CHANNEL | UNKNOWN_MEMBER | UNKNOWN_MESSAGE | UNKNOWN_USER => {
                Self::UnknownTarget
            }
            _ => Self::Rejected(message.to_string()),
        }
    }

    /// Message shown to the moderator whose action was rejected.
    pub fn user_message(&self) -> String {
        match self {
            Self::MessagesTooOld => "Error: Cannot delete messages older than 14 days.".to_string(),
            Self::MissingPermissions => {
                "Error: I do not have permission to do that. The target may have higher permissions than me."
                    .to_string()
            }
            Self::UnknownTarget => "Error: That user, channel or message no longer exists.".to_string(),
            Self::Rejected(reason) => format!("Error: The action failed. {}", reason),
        }
    }
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                Self::from_discord_code(response.error.code, &response.error.message)
            }
            _ => Self::Rejected(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the bulk-delete age rejection gets its own category.
    ///
    /// Expected: MessagesTooOld with a reply distinct from the generic failure
    #[test]
    fn maps_too_old_code() {
        let err = PlatformError::from_discord_code(50034, "You can only bulk delete messages that are under 14 days old.");

        assert_eq!(err, PlatformError::MessagesTooOld);
        assert_ne!(
            err.user_message(),
            PlatformError::Rejected(String::new()).user_message()
        );
        assert!(err.user_message().contains("older than 14 days"));
    }

    /// Tests permission and unknown-entity codes.
    ///
    /// Expected: MissingPermissions for 50001/50013, UnknownTarget for 10007
    #[test]
    fn maps_known_codes() {
        assert_eq!(
            PlatformError::from_discord_code(50013, "Missing Permissions"),
            PlatformError::MissingPermissions
        );
        assert_eq!(
            PlatformError::from_discord_code(50001, "Missing Access"),
            PlatformError::MissingPermissions
        );
        assert_eq!(
            PlatformError::from_discord_code(10007, "Unknown Member"),
            PlatformError::UnknownTarget
        );
    }

    /// Tests that unknown codes keep Discord's message.
    ///
    /// Expected: Rejected carrying the original message
    #[test]
    fn unknown_code_keeps_message() {
        let err = PlatformError::from_discord_code(40001, "Unauthorized");

        assert_eq!(err, PlatformError::Rejected("Unauthorized".to_string()));
        assert!(err.user_message().ends_with("Unauthorized"));
    }
}
