//! Identities of the people involved in a command.

use serenity::all::{Member, RoleId, User, UserId};

/// A user reduced to what logs and replies display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
}

impl UserRef {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.name.clone())
    }
}

/// The member who invoked a command, with what authorization needs to know.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub user: UserRef,
    pub role_ids: Vec<RoleId>,
    /// Whether the member's resolved permissions include Administrator.
    pub administrator: bool,
}

impl Invoker {
    /// Builds the invoker from the interaction's user and, in guilds, member data.
    ///
    /// Outside a guild there is no member, so the invoker has no roles or permissions.
    pub fn from_interaction(user: &User, member: Option<&Member>) -> Self {
        Self {
            user: UserRef::from(user),
            role_ids: member.map(|m| m.roles.clone()).unwrap_or_default(),
            administrator: member
                .and_then(|m| m.permissions)
                .is_some_and(|p| p.administrator()),
        }
    }
}

/// The bot's standing relative to a guild member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberStanding {
    /// The bot outranks the member and the member is not the guild owner.
    pub actionable: bool,
}

#[cfg(test)]
mod tests {
    use test_utils::serenity::create_test_user;

    use super::*;

    /// Tests that a user outside a guild carries no authority.
    ///
    /// Expected: no roles and no Administrator flag
    #[test]
    fn invoker_without_member_has_no_roles() {
        let user = create_test_user(42, "alice", false);

        let invoker = Invoker::from_interaction(&user, None);

        assert_eq!(invoker.user, UserRef::new(42u64, "alice"));
        assert!(invoker.role_ids.is_empty());
        assert!(!invoker.administrator);
    }
}
