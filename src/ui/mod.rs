//! Interactive console surface: prompts, table rendering, menu loop

pub mod menu;
pub mod prompt;
pub mod table;

pub use menu::MenuSession;
