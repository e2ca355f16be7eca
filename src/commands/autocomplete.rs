//! Autocomplete for the `song` option of `/song play`.

use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
};

use crate::error::AppError;
use crate::library::SongLibrary;
use crate::state::AppState;

/// Discord rejects autocomplete responses with more than 25 choices; the
/// original bot capped at 24.
pub const MAX_CHOICES: usize = 24;

pub async fn handle(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(focused) = interaction.data.autocomplete() else {
        return Ok(());
    };

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Autocomplete(choices(&state.library, focused.value)),
        )
        .await?;
    Ok(())
}

/// Builds the choice list: library names matching the typed fragment,
/// choice name = choice value = song name.
fn choices(library: &SongLibrary, fragment: &str) -> CreateAutocompleteResponse {
    library
        .search(fragment)
        .into_iter()
        .take(MAX_CHOICES)
        .fold(CreateAutocompleteResponse::new(), |response, name| {
            response.add_string_choice(name, name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn choice_names(response: &CreateAutocompleteResponse) -> Vec<String> {
        let json = serde_json::to_value(response).expect("Failed to serialize response");
        json["choices"]
            .as_array()
            .expect("Response should have choices")
            .iter()
            .map(|c| c["name"].as_str().expect("Choice name").to_string())
            .collect()
    }

    #[test]
    fn test_empty_library_yields_no_choices() {
        let library = SongLibrary::scan(Path::new("does-not-exist"));
        assert!(choice_names(&choices(&library, "")).is_empty());
    }

    #[test]
    fn test_choices_filter_and_mirror_name_into_value() {
        let dir = std::env::temp_dir().join(format!(
            "jukebox-autocomplete-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
        for name in ["alpha.mp3", "Alps.mp3", "beta.mp3"] {
            std::fs::write(dir.join(name), b"x").expect("Failed to write temp file");
        }

        let library = SongLibrary::scan(&dir);
        let response = choices(&library, "ALP");
        let json = serde_json::to_value(&response).expect("Failed to serialize response");

        let choices = json["choices"].as_array().expect("choices array");
        assert_eq!(choices.len(), 2);
        for choice in choices {
            assert_eq!(choice["name"], choice["value"]);
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_choices_capped_at_24() {
        let dir = std::env::temp_dir().join(format!(
            "jukebox-autocomplete-cap-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
        for i in 0..30 {
            std::fs::write(dir.join(format!("song-{i:02}.mp3")), b"x")
                .expect("Failed to write temp file");
        }

        let library = SongLibrary::scan(&dir);
        assert_eq!(choice_names(&choices(&library, "")).len(), MAX_CHOICES);

        std::fs::remove_dir_all(&dir).ok();
    }
}
