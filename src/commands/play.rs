//! `/song play <song>` — join a voice channel if needed and start playback.

use serenity::all::{ChannelId, CommandInteraction, Context};

use crate::commands::respond_embed;
use crate::embeds;
use crate::error::AppError;
use crate::state::AppState;

pub async fn handle(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    song: &str,
) -> Result<(), AppError> {
    let Some(path) = state.library.get(song) else {
        return respond_embed(
            ctx,
            command,
            embeds::error(&state.icons, format!("Song `{song}` not found.")),
        )
        .await;
    };

    // Outside a guild there is no voice state to join or play into.
    let Some(guild_id) = command.guild_id else {
        return respond_embed(
            ctx,
            command,
            embeds::error(
                &state.icons,
                "You must be in a voice channel to play a song.",
            ),
        )
        .await;
    };

    // Play in the bot's current channel if connected, otherwise join the
    // caller's channel.
    let channel_id = match state.player.current_channel(guild_id).await {
        Some(channel_id) => channel_id,
        None => {
            let Some(channel_id) = caller_voice_channel(ctx, command, guild_id) else {
                return respond_embed(
                    ctx,
                    command,
                    embeds::error(
                        &state.icons,
                        "You must be in a voice channel to play a song.",
                    ),
                )
                .await;
            };

            state.player.join(guild_id, channel_id).await?;
            channel_id
        }
    };

    let channel_name = channel_id.name(ctx).await?;
    respond_embed(
        ctx,
        command,
        embeds::playing(&state.icons, song, &channel_name),
    )
    .await?;

    tracing::info!("Playing {song} in {channel_name}");
    state.player.play(guild_id, path).await;

    Ok(())
}

/// The voice channel the invoking user is connected to, from the cache.
fn caller_voice_channel(
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: serenity::all::GuildId,
) -> Option<ChannelId> {
    // The cache guard must not be held across an await point; the cloned
    // voice state outlives it.
    ctx.cache
        .guild(guild_id)
        .and_then(|guild| guild.voice_states.get(&command.user.id).cloned())
        .and_then(|voice_state| voice_state.channel_id)
}
