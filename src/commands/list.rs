//! `/song list` — the whole library in one embed.

use serenity::all::{CommandInteraction, Context};

use crate::commands::respond_embed;
use crate::embeds;
use crate::error::AppError;
use crate::state::AppState;

pub async fn handle(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if state.library.is_empty() {
        return respond_embed(ctx, command, embeds::error(&state.icons, "No songs found.")).await;
    }

    respond_embed(
        ctx,
        command,
        embeds::song_list(&state.icons, state.library.names()),
    )
    .await
}
