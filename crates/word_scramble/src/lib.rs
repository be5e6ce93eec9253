//! Word Scramble terminal game.
//!
//! Wires [`word_scramble_core`] up to the outside world:
//!
//! - **Config**: TOML config with environment and command-line overrides
//! - **TUI**: the interactive ratatui game screen
//! - **Check**: batch-checks words against a root word for scripting
//! - **Logging**: tracing subscribers for file and stderr output

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod check;
mod config;
mod logging;
mod startup;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, DICTIONARY_ENV, GameConfig, WORDS_ENV};

// Crate-level exports - Startup
pub use startup::start_session;

// Crate-level exports - Batch checking
pub use check::{CheckReport, WordResult, check_session, run_check};

// Crate-level exports - Logging
pub use logging::{
    DEFAULT_FILE_FILTER, DEFAULT_STDERR_FILTER, init_file_logging, init_stderr_logging,
};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};
