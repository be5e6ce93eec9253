//! Word Scramble - Unified CLI
//!
//! Plays the game in the terminal, or checks words from the command line.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{error, info, instrument};
use word_scramble::{
    App, GameConfig, check_session, init_file_logging, init_stderr_logging, run_check, run_tui,
    start_session,
};
use word_scramble_core::WordListDictionary;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            word_list,
            dictionary,
            log_file,
        } => run_play(cli.config, word_list, dictionary, log_file),
        Command::Check {
            root,
            words,
            dictionary,
            json,
        } => run_check_command(cli.config, root, words, dictionary, json),
    }
}

/// Play in the terminal UI
fn run_play(
    config_path: PathBuf,
    word_list: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?
        .with_env()
        .with_overrides(word_list, dictionary, log_file);

    init_file_logging(config.log_file())?;
    info!(config = %config_path.display(), "Starting Word Scramble");

    let session = match start_session(&config) {
        Ok(session) => session,
        Err(e) => {
            error!(error = ?e, "Failed to start game");
            return Err(e);
        }
    };

    run_tui(App::new(session))
}

/// Check words against a root word and print the results
#[instrument(skip(words))]
fn run_check_command(
    config_path: PathBuf,
    root: String,
    words: Vec<String>,
    dictionary: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    init_stderr_logging();

    let config = GameConfig::load_or_default(&config_path)?
        .with_env()
        .with_overrides(None, dictionary, None);

    let dictionary = WordListDictionary::load(config.dictionary(), *config.language())
        .with_context(|| {
            format!(
                "Could not load dictionary from {}",
                config.dictionary().display()
            )
        })?;

    let mut session = check_session(&root, dictionary, *config.language())?;

    let report = run_check(&mut session, &words);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
