use serenity::all::{Context, Interaction};

use crate::commands;
use crate::state::AppState;

/// Handle slash command invocations and autocomplete requests.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    commands::handle_interaction(state, ctx, interaction).await;
}
