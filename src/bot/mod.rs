//! Discord gateway client and event handling.
//!
//! The bot connects to Discord's gateway with the songbird voice manager
//! attached and dispatches three events: `ready` (log the account, register
//! the slash command), `message` (automatic reactions), and
//! `interaction_create` (the `/song` command and its autocomplete).
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - the non-privileged default set
//! - `GUILD_MESSAGES` - receive messages for automatic reactions
//! - `GUILD_VOICE_STATES` - track which voice channel users are in
//!
//! No privileged intents are needed.

pub mod handler;
pub mod start;
