//! Core data model: songs and the playlist that holds them

pub mod playlist;
pub mod song;

pub use playlist::Playlist;
pub use song::Song;
