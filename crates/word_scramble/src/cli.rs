//! Command-line interface for word_scramble.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Word Scramble - spell new words from the letters of a random root word
#[derive(Parser, Debug)]
#[command(name = "word_scramble")]
#[command(about = "Terminal word scramble game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = word_scramble::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Newline-delimited list of root words
        #[arg(long)]
        word_list: Option<PathBuf>,

        /// Newline-delimited dictionary of accepted words
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// File to write logs to while playing
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Check words against a root word without the terminal UI
    Check {
        /// Root word to spell from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,

        /// Newline-delimited dictionary of accepted words
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            word_list: None,
            dictionary: None,
            log_file: None,
        }
    }
}
