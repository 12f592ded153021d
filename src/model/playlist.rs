use super::Song;
use crate::error::PlaylistError;

/// Ordered collection of songs, mirroring the on-disk JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    /// Songs in insertion order
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    /// Build a playlist from already-loaded records
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Find a song by its (title, artist) key, ignoring case
    pub fn find(&self, title: &str, artist: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.matches(title, artist))
    }

    /// Append a song; rejects a duplicate (title, artist) key
    pub fn add(&mut self, song: Song) -> Result<(), PlaylistError> {
        if self.find(&song.title, &song.artist).is_some() {
            return Err(PlaylistError::DuplicateSong {
                title: song.title,
                artist: song.artist,
            });
        }
        self.songs.push(song);
        Ok(())
    }

    /// Set the play count of an existing song, returning the previous count
    pub fn set_plays(&mut self, title: &str, artist: &str, plays: u64) -> Result<u64, PlaylistError> {
        match self.songs.iter_mut().find(|s| s.matches(title, artist)) {
            Some(song) => {
                let previous = song.plays;
                song.plays = plays;
                Ok(previous)
            }
            None => Err(PlaylistError::SongNotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            }),
        }
    }

    /// Remove a song by its (title, artist) key, returning the removed record
    pub fn remove(&mut self, title: &str, artist: &str) -> Result<Song, PlaylistError> {
        match self.songs.iter().position(|s| s.matches(title, artist)) {
            Some(index) => Ok(self.songs.remove(index)),
            None => Err(PlaylistError::SongNotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            }),
        }
    }

    /// Songs with at least `min_plays` plays, in playlist order
    pub fn with_min_plays(&self, min_plays: u64) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.plays >= min_plays).collect()
    }

    /// All songs in order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
