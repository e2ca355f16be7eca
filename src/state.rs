//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources
//! the gateway event handlers need. The state is built once during startup,
//! after the icon publish and library scan, and then owned by the event
//! handler for the lifetime of the gateway connection.

use crate::library::SongLibrary;
use crate::player::Player;
use crate::reactions::ReactionPolicy;
use crate::storage::icons::IconUrls;

/// Shared state owned by the gateway event handler.
///
/// All fields are cheap to clone: the library is built once and read-only,
/// the icon URLs are plain strings, and the player wraps an `Arc` around the
/// songbird manager.
#[derive(Clone)]
pub struct AppState {
    /// Song name to MP3 path mapping built at startup.
    pub library: SongLibrary,

    /// Public URLs of the embed thumbnail icons.
    pub icons: IconUrls,

    /// Which users' messages get which automatic reaction.
    pub reactions: ReactionPolicy,

    /// Voice playback service over the songbird manager.
    pub player: Player,
}

impl AppState {
    pub fn new(
        library: SongLibrary,
        icons: IconUrls,
        reactions: ReactionPolicy,
        player: Player,
    ) -> Self {
        Self {
            library,
            icons,
            reactions,
            player,
        }
    }
}
