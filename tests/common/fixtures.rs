//! Test fixture creation for the songs database

use super::constants::*;
use anyhow::{Context, Result};
use playlist_server::song::{Category, Song};
use playlist_server::song_store::{SongStore, SqliteSongStore};
use std::path::PathBuf;
use tempfile::TempDir;

fn make_song(title: &str, artist_name: &str, category: Category) -> Song {
    Song {
        id: None,
        title: title.to_string(),
        description: format!("{} description", title),
        duration: "3:30".to_string(),
        artist_name: artist_name.to_string(),
        category,
        audit: None,
    }
}

/// Creates a temporary songs database, optionally filled with 5 songs:
/// 2 POP by The Test Band, 2 JAZZ and 1 CLASSICAL by Jazz Ensemble.
/// Returns (temp_dir, db_path).
pub fn create_test_db(seed: bool) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("songs.db");

    // Initialize the store (creates schema)
    let store = SqliteSongStore::new(&db_path)?;

    if seed {
        let songs = [
            make_song(SONG_1_TITLE, ARTIST_1_NAME, Category::Pop),
            make_song(SONG_2_TITLE, ARTIST_1_NAME, Category::Pop),
            make_song(SONG_3_TITLE, ARTIST_2_NAME, Category::Jazz),
            make_song(SONG_4_TITLE, ARTIST_2_NAME, Category::Jazz),
            make_song(SONG_5_TITLE, ARTIST_2_NAME, Category::Classical),
        ];
        for song in songs.iter() {
            store
                .save(song)?
                .with_context(|| format!("Failed to seed song {}", song.title))?;
        }
    }

    Ok((dir, db_path))
}
