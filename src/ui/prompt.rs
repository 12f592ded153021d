//! Re-prompting input readers
//!
//! All readers are generic over `BufRead`/`Write` so the interactive flow
//! can be driven from in-memory buffers in tests. `Ok(None)` means the
//! input reached end-of-file and the caller should exit cleanly.

use crate::model::song::{field_in_bounds, MAX_FIELD_LEN, MIN_FIELD_LEN};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Read one line, trimmed; `None` on end-of-file
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a title/artist value until it fits the length bounds
pub fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;

        let Some(text) = read_line(input)? else {
            return Ok(None);
        };
        if field_in_bounds(&text) {
            return Ok(Some(text));
        }
        writeln!(
            out,
            "> Input must be {MIN_FIELD_LEN}-{MAX_FIELD_LEN} characters, try again."
        )?;
    }
}

/// Prompt for a non-negative integer until one parses
///
/// Accepts ASCII digits only, so signs and embedded whitespace re-prompt.
pub fn prompt_plays<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<u64>> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;

        let Some(text) = read_line(input)? else {
            return Ok(None);
        };
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(value) = text.parse::<u64>() {
                return Ok(Some(value));
            }
        }
        writeln!(out, "> Enter a non-negative integer.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_and_detects_eof() {
        let mut input = Cursor::new("  hello  \n");
        assert_eq!(read_line(&mut input).unwrap(), Some("hello".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_text_reprompts_until_valid() {
        let mut input = Cursor::new("\nBad Guy\n");
        let mut out = Vec::new();

        let text = prompt_text(&mut input, &mut out, "Title: ").unwrap();
        assert_eq!(text, Some("Bad Guy".to_string()));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("1-90 characters"));
    }

    #[test]
    fn test_prompt_text_rejects_overlong_value() {
        let long = "x".repeat(91);
        let mut input = Cursor::new(format!("{long}\nok\n"));
        let mut out = Vec::new();

        let text = prompt_text(&mut input, &mut out, "Title: ").unwrap();
        assert_eq!(text, Some("ok".to_string()));
    }

    #[test]
    fn test_prompt_plays_rejects_signs_and_garbage() {
        let mut input = Cursor::new("-5\n+5\n12a\n42\n");
        let mut out = Vec::new();

        let plays = prompt_plays(&mut input, &mut out, "Plays: ").unwrap();
        assert_eq!(plays, Some(42));

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("non-negative integer").count(), 3);
    }

    #[test]
    fn test_prompt_plays_eof_returns_none() {
        let mut input = Cursor::new("nope\n");
        let mut out = Vec::new();

        assert_eq!(prompt_plays(&mut input, &mut out, "Plays: ").unwrap(), None);
    }
}
