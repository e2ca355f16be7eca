//! Embed builders for every reply the bot sends.
//!
//! All four embed shapes carry a thumbnail served from the icons bucket:
//! the error icon for user errors, the music icon for everything else.

use serenity::all::CreateEmbed;

use crate::storage::icons::IconUrls;

const ERROR_COLOR: u32 = 0xFF0000;
const LIST_COLOR: u32 = 0x22AAFF;
const PLAYBACK_COLOR: u32 = 0x00FF00;

/// Error reply for user-level failures (song not found, no voice channel).
pub fn error(icons: &IconUrls, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("Error")
        .description(description)
        .color(ERROR_COLOR)
        .thumbnail(&icons.music_error)
}

/// The `/song list` reply: one backticked song name per line.
pub fn song_list<'a>(icons: &IconUrls, names: impl Iterator<Item = &'a str>) -> CreateEmbed {
    let songs = names
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join("\n");

    CreateEmbed::new()
        .title("Songs")
        .description(songs)
        .color(LIST_COLOR)
        .thumbnail(&icons.music)
}

/// The `/song play` reply naming the song and the voice channel.
pub fn playing(icons: &IconUrls, song: &str, channel_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Playing")
        .description(format!("Playing `{song}` in {channel_name}"))
        .color(PLAYBACK_COLOR)
        .thumbnail(&icons.music)
}

/// The `/song stop` reply naming the voice channel that was left.
pub fn stopped(icons: &IconUrls, channel_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Stopped")
        .description(format!("Stopped playing in {channel_name}"))
        .color(PLAYBACK_COLOR)
        .thumbnail(&icons.music)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_icons() -> IconUrls {
        IconUrls {
            music: "https://storage.example/music.png".to_string(),
            music_error: "https://storage.example/music_error.png".to_string(),
        }
    }

    #[test]
    fn test_error_embed_shape() {
        let embed = error(&test_icons(), "No songs found.");
        let json = serde_json::to_value(&embed).expect("Failed to serialize embed");

        assert_eq!(json["title"], "Error");
        assert_eq!(json["description"], "No songs found.");
        assert_eq!(json["color"], 0xFF0000);
        assert_eq!(
            json["thumbnail"]["url"],
            "https://storage.example/music_error.png"
        );
    }

    #[test]
    fn test_song_list_embed_backticks_each_name() {
        let embed = song_list(&test_icons(), ["alpha", "beta"].into_iter());
        let json = serde_json::to_value(&embed).expect("Failed to serialize embed");

        assert_eq!(json["title"], "Songs");
        assert_eq!(json["description"], "`alpha`\n`beta`");
        assert_eq!(json["color"], 0x22AAFF);
        assert_eq!(json["thumbnail"]["url"], "https://storage.example/music.png");
    }

    #[test]
    fn test_playing_embed_names_song_and_channel() {
        let embed = playing(&test_icons(), "alpha", "General");
        let json = serde_json::to_value(&embed).expect("Failed to serialize embed");

        assert_eq!(json["title"], "Playing");
        assert_eq!(json["description"], "Playing `alpha` in General");
        assert_eq!(json["color"], 0x00FF00);
        assert_eq!(json["thumbnail"]["url"], "https://storage.example/music.png");
    }

    #[test]
    fn test_stopped_embed_names_channel() {
        let embed = stopped(&test_icons(), "General");
        let json = serde_json::to_value(&embed).expect("Failed to serialize embed");

        assert_eq!(json["title"], "Stopped");
        assert_eq!(json["description"], "Stopped playing in General");
        assert_eq!(json["color"], 0x00FF00);
    }
}
