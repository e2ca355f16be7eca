//! The song library: a mapping from song name to MP3 path.
//!
//! The library is built once at startup by scanning the top level of the
//! music directory. Song names are the file stems, so `music/Resurrections.mp3`
//! becomes the song `Resurrections`. A missing or empty directory yields an
//! empty library; startup proceeds and `/song list` reports the empty case.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Ordered mapping of song name to MP3 file path.
#[derive(Debug, Clone, Default)]
pub struct SongLibrary {
    songs: BTreeMap<String, PathBuf>,
}

impl SongLibrary {
    /// Builds the library from the top-level `.mp3` entries of `dir`.
    ///
    /// The extension match is case-insensitive. Subdirectories are not
    /// descended into.
    pub fn scan(dir: &Path) -> Self {
        let songs = WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
            })
            .filter_map(|e| {
                let name = e.path().file_stem()?.to_str()?.to_string();
                Some((name, e.path().to_path_buf()))
            })
            .collect();

        Self { songs }
    }

    /// Exact lookup by song name.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.songs.get(name).map(PathBuf::as_path)
    }

    /// All song names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.songs.keys().map(String::as_str)
    }

    /// Case-insensitive substring search over song names.
    ///
    /// An empty fragment matches every song. Used by `/song play`
    /// autocomplete.
    pub fn search(&self, fragment: &str) -> Vec<&str> {
        let fragment = fragment.to_lowercase();
        self.names()
            .filter(|name| name.to_lowercase().contains(&fragment))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Creates a unique temporary directory populated with the given files.
    fn temp_dir_with_files(test: &str, files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jukebox-library-{test}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        for name in files {
            fs::write(dir.join(name), b"not really audio").expect("Failed to write temp file");
        }
        dir
    }

    #[test]
    fn test_scan_picks_up_mp3_files_by_stem() {
        let dir = temp_dir_with_files("stems", &["alpha.mp3", "Beta Song.mp3"]);

        let library = SongLibrary::scan(&dir);

        assert_eq!(library.len(), 2);
        assert_eq!(library.get("alpha"), Some(dir.join("alpha.mp3").as_path()));
        assert_eq!(
            library.get("Beta Song"),
            Some(dir.join("Beta Song.mp3").as_path())
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_scan_ignores_other_extensions_and_subdirectories() {
        let dir = temp_dir_with_files("filter", &["song.mp3", "cover.png", "notes.txt"]);
        let nested = dir.join("nested");
        fs::create_dir_all(&nested).expect("Failed to create nested dir");
        fs::write(nested.join("hidden.mp3"), b"x").expect("Failed to write nested file");

        let library = SongLibrary::scan(&dir);

        assert_eq!(library.names().collect::<Vec<_>>(), vec!["song"]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_scan_extension_match_is_case_insensitive() {
        let dir = temp_dir_with_files("case", &["loud.MP3"]);

        let library = SongLibrary::scan(&dir);

        assert!(library.get("loud").is_some());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_scan_missing_directory_yields_empty_library() {
        let dir = std::env::temp_dir().join("jukebox-library-does-not-exist");

        let library = SongLibrary::scan(&dir);

        assert!(library.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut library = SongLibrary::default();
        library.songs.insert("Resurrections".to_string(), "a.mp3".into());
        library.songs.insert("Shovel Knight".to_string(), "b.mp3".into());
        library.songs.insert("resolution".to_string(), "c.mp3".into());

        assert_eq!(library.search("RES"), vec!["Resurrections", "resolution"]);
        assert_eq!(library.search("knight"), vec!["Shovel Knight"]);
        assert!(library.search("zzz").is_empty());
    }

    #[test]
    fn test_search_empty_fragment_matches_everything() {
        let mut library = SongLibrary::default();
        library.songs.insert("one".to_string(), "1.mp3".into());
        library.songs.insert("two".to_string(), "2.mp3".into());

        assert_eq!(library.search(""), vec!["one", "two"]);
    }
}
