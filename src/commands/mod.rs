//! The `/song` slash command: registration and interaction dispatch.
//!
//! One global command with three subcommands (`list`, `play`, `stop`);
//! `play` takes a required `song` option with autocomplete over the library.
//! User-level failures are answered with error embeds, never propagated.

pub mod autocomplete;
pub mod list;
pub mod play;
pub mod stop;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
    ResolvedValue,
};

use crate::embeds;
use crate::error::AppError;
use crate::state::AppState;

pub const COMMAND_NAME: &str = "song";

/// Reply for unexpected failures (join errors, HTTP errors) while serving a
/// command, so the user is not left with a silently dropped interaction.
const COMMAND_FAILED_MESSAGE: &str = "Something went wrong while running the command.";

/// Builds the `/song` command tree for global registration.
pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Play songs from the music library")
        .set_options(vec![
            CreateCommandOption::new(CommandOptionType::SubCommand, "list", "List all songs"),
            CreateCommandOption::new(CommandOptionType::SubCommand, "play", "Play a song")
                .set_sub_options(vec![CreateCommandOption::new(
                    CommandOptionType::String,
                    "song",
                    "The name of the song to play",
                )
                .required(true)
                .set_autocomplete(true)]),
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "stop",
                "Stop the current song",
            ),
        ])
}

/// Entry point for every interaction event.
///
/// Failures while serving a command are logged; the event loop continues.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) if command.data.name == COMMAND_NAME => {
            if let Err(e) = dispatch(state, &ctx, &command).await {
                tracing::error!("Failed to handle /{COMMAND_NAME} command: {e}");

                // Best effort: a response may already have been sent, in
                // which case this create_response is rejected and ignored.
                let fallback = embeds::error(&state.icons, COMMAND_FAILED_MESSAGE);
                if let Err(e) = respond_embed(&ctx, &command, fallback).await {
                    tracing::debug!("Could not send failure reply: {e}");
                }
            }
        }
        Interaction::Autocomplete(command) if command.data.name == COMMAND_NAME => {
            if let Err(e) = autocomplete::handle(state, &ctx, &command).await {
                tracing::error!("Failed to answer /{COMMAND_NAME} autocomplete: {e}");
            }
        }
        _ => {}
    }
}

/// Routes a `/song` invocation to its subcommand handler.
async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let Some(subcommand) = options.first() else {
        return Ok(());
    };

    match (subcommand.name, &subcommand.value) {
        ("list", _) => list::handle(state, ctx, command).await,
        ("play", ResolvedValue::SubCommand(args)) => {
            let Some(song) = args.iter().find_map(|arg| match (arg.name, &arg.value) {
                ("song", ResolvedValue::String(song)) => Some(*song),
                _ => None,
            }) else {
                return Ok(());
            };
            play::handle(state, ctx, command, song).await
        }
        ("stop", _) => stop::handle(state, ctx, command).await,
        _ => Ok(()),
    }
}

/// Answers the interaction with a single embed.
pub(crate) async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;
    Ok(())
}
