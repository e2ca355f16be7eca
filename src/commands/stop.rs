//! `/song stop` — stop playback and leave the voice channel.

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
    let connected = match command.guild_id {
        Some(guild_id) => state
            .player
            .current_channel(guild_id)
            .await
            .map(|channel_id| (guild_id, channel_id)),
        None => None,
    };

    let Some((guild_id, channel_id)) = connected else {
        return respond_embed(
            ctx,
            command,
            embeds::error(&state.icons, "Not connected to a voice channel."),
        )
        .await;
    };

    let channel_name = channel_id.name(ctx).await?;
    state.player.stop(guild_id).await;

    respond_embed(
        ctx,
        command,
        embeds::stopped(&state.icons, &channel_name),
    )
    .await?;

    state.player.leave(guild_id).await?;
    Ok(())
}
