//! JSON persistence for the playlist file

use crate::model::{Playlist, Song};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample library written on first run so the user starts from visible data
const SAMPLE_SONGS: &[(&str, &str, u64)] = &[
    ("Shape of You", "Ed Sheeran", 1560),
    ("Blinding Lights", "The Weeknd", 1780),
    ("Bad Guy", "Billie Eilish", 1340),
    ("Dance Monkey", "Tones and I", 1120),
    ("Levitating", "Dua Lipa", 980),
];

/// Reads and writes the playlist as a JSON array of song objects
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the playlist; on first run, seed the sample library and save it
    pub fn load(&self) -> Result<Playlist> {
        if !self.path.exists() {
            log::info!("No playlist file at {:?}, seeding sample data", self.path);
            let playlist = Playlist::from_songs(
                SAMPLE_SONGS
                    .iter()
                    .map(|&(title, artist, plays)| Song::new(title, artist, plays))
                    .collect(),
            );
            self.save(&playlist)?;
            return Ok(playlist);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read playlist file: {:?}", self.path))?;
        let songs: Vec<Song> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse playlist file: {:?}", self.path))?;

        log::debug!("Loaded {} song(s) from {:?}", songs.len(), self.path);
        Ok(Playlist::from_songs(songs))
    }

    /// Write the full playlist back to disk
    pub fn save(&self, playlist: &Playlist) -> Result<()> {
        let json = serde_json::to_string_pretty(playlist.songs())
            .context("Failed to serialize playlist")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write playlist file: {:?}", self.path))?;

        log::debug!("Saved {} song(s) to {:?}", playlist.len(), self.path);
        Ok(())
    }
}
