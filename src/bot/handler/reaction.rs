use serenity::all::{Context, Reaction};

use crate::{bot::state::BotState, service::vote::opposing_vote};

/// Keeps members to one vote on suggestion posts.
///
/// When a member adds one of the vote reactions in the suggestions channel, their
/// opposite vote is removed. Bots, including this one, are ignored.
pub async fn handle_reaction_add(state: &BotState, ctx: Context, reaction: Reaction) {
    if state.settings.suggestions.channel != Some(reaction.channel_id) {
        return;
    }

    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id
        || reaction.member.as_ref().is_some_and(|m| m.user.bot)
    {
        return;
    }

    let Some(opposite) = opposing_vote(&state.settings.suggestions.reactions, &reaction.emoji)
    else {
        return;
    };

    if let Err(e) = reaction
        .channel_id
        .delete_reaction(
            &ctx.http,
            reaction.message_id,
            Some(user_id),
            opposite.clone(),
        )
        .await
    {
        tracing::warn!(
            "Failed to remove opposite vote of {} on message {}: {}",
            user_id,
            reaction.message_id,
            e
        );
    }
}
