use serde::{Deserialize, Serialize};

/// Minimum length of a title or artist field
pub const MIN_FIELD_LEN: usize = 1;

/// Maximum length of a title or artist field
pub const MAX_FIELD_LEN: usize = 90;

/// A single song record as persisted in the playlist file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title (1-90 characters)
    pub title: String,

    /// Artist name (1-90 characters)
    pub artist: String,

    /// Total play count
    pub plays: u64,
}

impl Song {
    /// Create a new song record
    pub fn new(title: impl Into<String>, artist: impl Into<String>, plays: u64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            plays,
        }
    }

    /// Whether this song matches the given (title, artist) key, ignoring case
    pub fn matches(&self, title: &str, artist: &str) -> bool {
        self.title.eq_ignore_ascii_case(title) && self.artist.eq_ignore_ascii_case(artist)
    }
}

/// Check a trimmed title/artist value against the field length bounds
pub fn field_in_bounds(text: &str) -> bool {
    (MIN_FIELD_LEN..=MAX_FIELD_LEN).contains(&text.chars().count())
}
