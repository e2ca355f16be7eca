use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use songbird::Songbird;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the gateway client with the shared state and the songbird voice
/// manager, then runs it until shutdown. The manager passed here must be the
/// same one the state's player holds.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Shared state for the event handlers
/// - `manager` - Songbird voice manager to attach to the client
///
/// # Returns
/// - `Ok(())` if the bot runs until a clean shutdown
/// - `Err(AppError)` if client construction or the connection fails
pub async fn start_bot(
    config: &Config,
    state: AppState,
    manager: Arc<Songbird>,
) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(state);

    let mut client = Client::builder(&config.bot_token, intents)
        .event_handler(handler)
        .voice_manager_arc(manager)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
