//! Plain-text table rendering for song listings

use crate::model::Song;

const HEADERS: [&str; 3] = ["Title", "Artist", "Plays"];

/// Render songs as an aligned three-column table
pub fn render(songs: &[&Song]) -> String {
    let rows: Vec<[String; 3]> = songs
        .iter()
        .map(|s| [s.title.clone(), s.artist.clone(), s.plays.to_string()])
        .collect();

    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(format!(
        "| {} | {} | {} |",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
    ));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    format!(
        "| {:<w0$} | {:<w1$} | {:<w2$} |",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}
