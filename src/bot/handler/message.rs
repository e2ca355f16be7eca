use serenity::all::{Context, Message};

use crate::state::AppState;

/// Handle message creation in a channel.
///
/// Applies the automatic reaction the policy selects for the author, if any.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    let Some(reaction) = state.reactions.reaction_for(&message) else {
        return;
    };

    if let Err(e) = message.react(&ctx, reaction).await {
        tracing::error!("Failed to react to message {}: {e}", message.id);
    }
}
