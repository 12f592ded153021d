use anyhow::Result;
use clap::Parser;
use playlist_manager::{JsonStore, MenuSession};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Console playlist manager backed by a JSON file", long_about = None)]
struct Args {
    /// Path to the playlist file
    #[arg(short = 'f', long, default_value = "songs.json")]
    file: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the playlist path
    let file_path = shellexpand::tilde(&args.file);
    let store = JsonStore::new(PathBuf::from(file_path.as_ref()));

    log::info!("Loading playlist from {:?}", store.path());
    let playlist = store.load()?;
    log::info!("Playlist loaded: {} song(s)", playlist.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(playlist, store, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
