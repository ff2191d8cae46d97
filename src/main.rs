//! Jyutle - CLI
//!
//! Daily Jyutping word-guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use jyutle::{
    commands::run_simple,
    core::Entry,
    dictionary::{
        ANSWERS, Dictionary, WORDS,
        daily::{daily_answer, practice_answer, today_string},
        loader::{entries_from_slice, load_from_file},
    },
    interactive::{App, run_tui},
    output::print_statistics,
    store::{FileStore, KeyValueStore, MemoryStore, Session, load_statistics},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jyutle",
    about = "Daily Jyutping word-guessing game (six symbols, six rounds)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enforce the stricter hard-mode replay constraint
    #[arg(long, global = true)]
    hard: bool,

    /// Play the puzzle of a specific date (YYYY-MM-DD) instead of today
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Practice against a random answer (nothing persisted, no statistics)
    #[arg(short, long, global = true)]
    practice: bool,

    /// Wordlist: 'embedded' (default) or path to a 7-field word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Store file (default: $HOME/.jyutle.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show lifetime statistics
    Stats,
}

/// Load wordlists based on the -w flag
///
/// Returns (`dictionary_entries`, `answer_pool`)
/// - "embedded": the compiled-in lists
/// - "<path>": load a custom word file; it doubles as the answer pool
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Entry>, Vec<Entry>)> {
    match wordlist_mode {
        "embedded" => Ok((entries_from_slice(WORDS), entries_from_slice(ANSWERS))),
        path => {
            let entries = load_from_file(path)
                .with_context(|| format!("failed to read word file {path}"))?;
            Ok((entries.clone(), entries))
        }
    }
}

fn default_store_path() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".jyutle.json")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (words, answers) = load_wordlists(&cli.wordlist)?;
    let dictionary = Dictionary::new(words);

    let date = cli.date.clone().unwrap_or_else(today_string);
    NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("--date must be YYYY-MM-DD, got {date:?}"))?;

    let store_path = cli.store.clone().unwrap_or_else(default_store_path);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = match command {
        Commands::Play => true,
        Commands::Simple => false,
        Commands::Stats => {
            print_statistics(&load_statistics(&FileStore::open(store_path)));
            return Ok(());
        }
    };

    if cli.practice {
        let answer = practice_answer(&answers)
            .context("word list has no answers")?
            .clone();
        let session = Session::resume_or_start(MemoryStore::new(), &answers, answer, &date, cli.hard);
        run_game(tui, session, &dictionary)
    } else {
        let answer = daily_answer(&answers, &date)
            .context("word list has no answers")?
            .clone();
        let store = FileStore::open(store_path);
        let session = Session::resume_or_start(store, &answers, answer, &date, cli.hard);
        run_game(tui, session, &dictionary)
    }
}

fn run_game<S: KeyValueStore>(
    tui: bool,
    mut session: Session<S>,
    dictionary: &Dictionary,
) -> Result<()> {
    if tui {
        run_tui(App::new(session, dictionary))
    } else {
        run_simple(&mut session, dictionary).map_err(|e| anyhow::anyhow!(e))
    }
}
