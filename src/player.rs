//! Voice playback over the songbird manager.
//!
//! One track at a time: starting a song replaces whatever is playing, and a
//! track-event handler disconnects the bot from the voice channel once the
//! track ends or errors out.

use std::path::Path;
use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;
use songbird::error::JoinError;
use songbird::input::File;
use songbird::{Event, EventContext, EventHandler as VoiceEventHandler, Songbird, TrackEvent};

/// Voice orchestration service shared by the command handlers.
#[derive(Clone)]
pub struct Player {
    manager: Arc<Songbird>,
}

impl Player {
    pub fn new(manager: Arc<Songbird>) -> Self {
        Self { manager }
    }

    /// The voice channel the bot is currently connected to in this guild.
    pub async fn current_channel(&self, guild_id: GuildId) -> Option<ChannelId> {
        let call = self.manager.get(guild_id)?;
        let channel = call.lock().await.current_channel()?;
        Some(ChannelId::new(channel.0.get()))
    }

    /// Connects to a voice channel.
    pub async fn join(&self, guild_id: GuildId, channel_id: ChannelId) -> Result<(), JoinError> {
        self.manager.join(guild_id, channel_id).await?;
        Ok(())
    }

    /// Plays the MP3 at `path` as the only track in this guild's call.
    ///
    /// The bot leaves the voice channel when the track finishes or fails.
    /// Requires an active call; callers join first.
    pub async fn play(&self, guild_id: GuildId, path: &Path) {
        let Some(call) = self.manager.get(guild_id) else {
            tracing::warn!("No active call in guild {guild_id}, not playing");
            return;
        };

        let mut handler = call.lock().await;
        let track = handler.play_only_input(File::new(path.to_path_buf()).into());

        for event in [TrackEvent::End, TrackEvent::Error] {
            let result = track.add_event(
                Event::Track(event),
                LeaveOnFinish {
                    guild_id,
                    manager: self.manager.clone(),
                },
            );
            if let Err(e) = result {
                tracing::error!("Failed to attach {event:?} handler: {e}");
            }
        }
    }

    /// Stops all tracks in this guild's call.
    pub async fn stop(&self, guild_id: GuildId) {
        if let Some(call) = self.manager.get(guild_id) {
            call.lock().await.stop();
        }
    }

    /// Disconnects from the voice channel and drops the call handle.
    pub async fn leave(&self, guild_id: GuildId) -> Result<(), JoinError> {
        self.manager.remove(guild_id).await
    }
}

/// Disconnects from the voice channel once the current track is done.
struct LeaveOnFinish {
    guild_id: GuildId,
    manager: Arc<Songbird>,
}

#[async_trait]
impl VoiceEventHandler for LeaveOnFinish {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<Event> {
        if let Err(e) = self.manager.remove(self.guild_id).await {
            tracing::error!(
                "Failed to leave voice channel in guild {}: {e}",
                self.guild_id
            );
        }
        None
    }
}
