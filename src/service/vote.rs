//! One vote per member on suggestion posts.

use serenity::all::ReactionType;

use crate::config::settings::VoteReactions;

/// Returns the vote reaction a member must lose after adding `added`.
///
/// Reactions other than the two configured votes return `None` and are left alone.
pub fn opposing_vote<'a>(
    reactions: &'a VoteReactions,
    added: &ReactionType,
) -> Option<&'a ReactionType> {
    if same_emoji(added, &reactions.upvote) {
        Some(&reactions.downvote)
    } else if same_emoji(added, &reactions.downvote) {
        Some(&reactions.upvote)
    } else {
        None
    }
}

/// Custom emoji are compared by ID since gateway events may omit or rename them.
fn same_emoji(a: &ReactionType, b: &ReactionType) -> bool {
    match (a, b) {
        (ReactionType::Custom { id: a, .. }, ReactionType::Custom { id: b, .. }) => a == b,
        (ReactionType::Unicode(a), ReactionType::Unicode(b)) => {
            a.trim_end_matches('\u{fe0f}') == b.trim_end_matches('\u{fe0f}')
        }
        _ => false,
    }
}
