//! Playlist Manager - console playlist CRUD tool
//!
//! Manages a small, locally-persisted playlist: listing, adding, editing
//! play counts, deleting, and filtering songs by minimum play count,
//! backed by a flat JSON file.

pub mod error;
pub mod model;
pub mod store;
pub mod ui;

pub use error::PlaylistError;
pub use model::{Playlist, Song};
pub use store::JsonStore;
pub use ui::menu::MenuSession;
