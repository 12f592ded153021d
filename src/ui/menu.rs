//! Interactive menu loop

use super::{prompt, table};
use crate::model::{Playlist, Song};
use crate::store::JsonStore;
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\
==================  MENU  ==================
1. List all songs
2. Add a song
3. Edit a song's play count
4. Delete a song
5. Build a playlist by minimum plays
6. Quit
============================================";

/// One interactive session over the playlist
///
/// Generic over the input/output streams so scripted sessions can run
/// against in-memory buffers. Every mutation rewrites the playlist file
/// before the menu is shown again.
pub struct MenuSession<R: BufRead, W: Write> {
    playlist: Playlist,
    store: JsonStore,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Create a session over a loaded playlist
    pub fn new(playlist: Playlist, store: JsonStore, input: R, out: W) -> Self {
        Self {
            playlist,
            store,
            input,
            out,
        }
    }

    /// Current in-memory playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Consume the session and return its output stream
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n{MENU}")?;
            write!(self.out, "Enter a menu option: ")?;
            self.out.flush()?;

            let Some(choice) = prompt::read_line(&mut self.input)? else {
                break;
            };

            let input_open = match choice.as_str() {
                "1" => {
                    self.list_songs()?;
                    true
                }
                "2" => self.add_song()?,
                "3" => self.edit_song()?,
                "4" => self.delete_song()?,
                "5" => self.filter_songs()?,
                "6" => {
                    writeln!(self.out, "Thanks for listening, goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.out, "> Invalid choice, enter 1-6.")?;
                    true
                }
            };

            if !input_open {
                break;
            }
        }

        // Input ended without an explicit quit
        writeln!(self.out, "\nInput closed, goodbye!")?;
        Ok(())
    }

    fn list_songs(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            writeln!(self.out, "The playlist is empty.\n")?;
            return Ok(());
        }
        let songs: Vec<&Song> = self.playlist.songs().iter().collect();
        writeln!(self.out, "{}\n", table::render(&songs))?;
        Ok(())
    }

    fn add_song(&mut self) -> Result<bool> {
        writeln!(self.out, "\n--- Add a song ---")?;
        let Some(title) = prompt::prompt_text(&mut self.input, &mut self.out, "Song title: ")?
        else {
            return Ok(false);
        };
        let Some(artist) = prompt::prompt_text(&mut self.input, &mut self.out, "Artist: ")? else {
            return Ok(false);
        };

        // Reject a duplicate before asking for the play count
        if self.playlist.find(&title, &artist).is_some() {
            writeln!(
                self.out,
                "> That song already exists; use option 3 to change its play count.\n"
            )?;
            return Ok(true);
        }

        let Some(plays) = prompt::prompt_plays(&mut self.input, &mut self.out, "Play count: ")?
        else {
            return Ok(false);
        };

        // The duplicate check above already ran, so this cannot fail
        self.playlist.add(Song::new(title, artist, plays))?;
        self.store.save(&self.playlist)?;
        writeln!(self.out, "Song added.\n")?;
        Ok(true)
    }

    fn edit_song(&mut self) -> Result<bool> {
        writeln!(self.out, "\n--- Edit play count ---")?;
        let Some(title) = prompt::prompt_text(&mut self.input, &mut self.out, "Song title: ")?
        else {
            return Ok(false);
        };
        let Some(artist) = prompt::prompt_text(&mut self.input, &mut self.out, "Artist: ")? else {
            return Ok(false);
        };

        let Some(current) = self.playlist.find(&title, &artist).map(|s| s.plays) else {
            writeln!(self.out, "> Song not found.\n")?;
            return Ok(true);
        };

        let label = format!("Currently played {current} time(s), new play count: ");
        let Some(plays) = prompt::prompt_plays(&mut self.input, &mut self.out, &label)? else {
            return Ok(false);
        };

        // find() above already matched, so this cannot fail
        self.playlist.set_plays(&title, &artist, plays)?;
        self.store.save(&self.playlist)?;
        writeln!(self.out, "Play count updated.\n")?;
        Ok(true)
    }

    fn delete_song(&mut self) -> Result<bool> {
        writeln!(self.out, "\n--- Delete a song ---")?;
        let Some(title) = prompt::prompt_text(&mut self.input, &mut self.out, "Song title: ")?
        else {
            return Ok(false);
        };
        let Some(artist) = prompt::prompt_text(&mut self.input, &mut self.out, "Artist: ")? else {
            return Ok(false);
        };

        match self.playlist.remove(&title, &artist) {
            Ok(removed) => {
                self.store.save(&self.playlist)?;
                writeln!(self.out, "Deleted: {} - {}\n", removed.title, removed.artist)?;
            }
            Err(_) => writeln!(self.out, "> Song not found.\n")?,
        }
        Ok(true)
    }

    fn filter_songs(&mut self) -> Result<bool> {
        writeln!(self.out, "\n--- Build a playlist ---")?;
        let Some(min_plays) =
            prompt::prompt_plays(&mut self.input, &mut self.out, "Minimum play count: ")?
        else {
            return Ok(false);
        };

        let matches = self.playlist.with_min_plays(min_plays);
        if matches.is_empty() {
            writeln!(self.out, "> No songs match.\n")?;
            return Ok(true);
        }

        writeln!(self.out, "Songs with at least {min_plays} play(s):")?;
        writeln!(self.out, "{}\n", table::render(&matches))?;
        Ok(true)
    }
}
