use playlist_manager::{JsonStore, MenuSession, Playlist};
use std::io::Cursor;
use tempfile::TempDir;

/// Run a scripted menu session against a fresh (seeded) playlist file,
/// returning the store, the final in-memory playlist, and the output.
fn run_session(script: &str) -> (TempDir, JsonStore, Playlist, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().join("songs.json"));
    let playlist = store.load().expect("Failed to seed playlist");

    let mut session = MenuSession::new(
        playlist,
        store.clone(),
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    session.run().expect("Session failed");

    let playlist = session.playlist().clone();
    let out = String::from_utf8(session.into_output()).expect("Output is not UTF-8");
    (temp_dir, store, playlist, out)
}

#[test]
fn test_add_song_persists_to_disk() {
    let script = "2\nFlowers\nMiley Cyrus\n850\n6\n";
    let (_dir, store, playlist, out) = run_session(script);

    assert!(out.contains("Song added."));
    assert_eq!(playlist.len(), 6);

    // The mutation was written through before the session ended
    let on_disk = store.load().expect("Failed to reload playlist");
    let song = on_disk.find("Flowers", "Miley Cyrus").expect("Song missing");
    assert_eq!(song.plays, 850);
}

#[test]
fn test_edit_shows_current_count_and_persists() {
    let script = "3\nBad Guy\nBillie Eilish\n2000\n6\n";
    let (_dir, store, _playlist, out) = run_session(script);

    assert!(out.contains("Currently played 1340 time(s)"));
    assert!(out.contains("Play count updated."));

    let on_disk = store.load().expect("Failed to reload playlist");
    assert_eq!(on_disk.find("Bad Guy", "Billie Eilish").unwrap().plays, 2000);
}

#[test]
fn test_edit_missing_song_reports_not_found_without_mutating() {
    let script = "3\nNonexistent\nNobody\n6\n";
    let (_dir, store, playlist, out) = run_session(script);

    assert!(out.contains("Song not found."));
    assert_eq!(playlist.len(), 5);

    let on_disk = store.load().expect("Failed to reload playlist");
    assert_eq!(on_disk, playlist);
}

#[test]
fn test_delete_song_persists_to_disk() {
    let script = "4\nlevitating\nDUA LIPA\n6\n";
    let (_dir, store, playlist, out) = run_session(script);

    assert!(out.contains("Deleted: Levitating - Dua Lipa"));
    assert_eq!(playlist.len(), 4);

    let on_disk = store.load().expect("Failed to reload playlist");
    assert!(on_disk.find("Levitating", "Dua Lipa").is_none());
}

#[test]
fn test_delete_missing_song_reports_not_found_without_mutating() {
    let script = "4\nNonexistent\nNobody\n6\n";
    let (_dir, store, playlist, out) = run_session(script);

    assert!(out.contains("Song not found."));
    let on_disk = store.load().expect("Failed to reload playlist");
    assert_eq!(on_disk.len(), 5);
    assert_eq!(on_disk, playlist);
}

#[test]
fn test_filter_is_read_only() {
    let script = "5\n1200\n6\n";
    let (_dir, store, _playlist, out) = run_session(script);

    assert!(out.contains("Songs with at least 1200 play(s):"));
    assert!(out.contains("Blinding Lights"));
    assert!(!out.contains("Levitating"));

    let on_disk = store.load().expect("Failed to reload playlist");
    assert_eq!(on_disk.len(), 5);
}

#[test]
fn test_filter_with_no_matches_prints_notice() {
    let script = "5\n999999\n6\n";
    let (_dir, _store, _playlist, out) = run_session(script);

    assert!(out.contains("No songs match."));
}

#[test]
fn test_invalid_input_reprompts_then_succeeds() {
    // Bad menu choice, overlong title, then a valid add
    let long_title = "x".repeat(91);
    let script = format!("7\n2\n{long_title}\nValid Title\nSome Artist\nabc\n-1\n10\n6\n");
    let (_dir, store, _playlist, out) = run_session(&script);

    assert!(out.contains("Invalid choice, enter 1-6."));
    assert!(out.contains("1-90 characters"));
    assert!(out.contains("non-negative integer"));
    assert!(out.contains("Song added."));

    let on_disk = store.load().expect("Failed to reload playlist");
    assert_eq!(on_disk.find("Valid Title", "Some Artist").unwrap().plays, 10);
}

#[test]
fn test_eof_mid_operation_exits_cleanly() {
    // Input ends while the add flow is asking for the artist
    let script = "2\nHalf Added\n";
    let (_dir, store, playlist, out) = run_session(script);

    assert!(out.contains("Input closed, goodbye!"));
    assert_eq!(playlist.len(), 5);

    let on_disk = store.load().expect("Failed to reload playlist");
    assert!(on_disk.find("Half Added", "").is_none());
    assert_eq!(on_disk.len(), 5);
}
