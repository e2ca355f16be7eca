//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway and completes the initial
//! handshake. The handler logs the connected account and registers the
//! `/song` command globally; registration is an idempotent upsert on
//! Discord's side, so re-running it on every reconnect is harmless.

use serenity::all::{Command, Context, Ready};

use crate::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, vec![commands::register()]).await {
        Ok(registered) => {
            tracing::info!("Registered {} global slash commands", registered.len())
        }
        Err(e) => tracing::error!("Failed to register slash commands: {e}"),
    }
}
