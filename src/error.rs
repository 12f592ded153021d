//! Domain errors for playlist operations

use thiserror::Error;

/// Errors from playlist mutations the menu reports to the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    /// A song with the same (title, artist) key already exists
    #[error("song already exists: {title} - {artist}")]
    DuplicateSong { title: String, artist: String },

    /// No song matches the given (title, artist) key
    #[error("song not found: {title} - {artist}")]
    SongNotFound { title: String, artist: String },
}
