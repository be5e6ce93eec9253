//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so while it runs logs go to a file. The
//! `check` command logs to stderr instead.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used for the log file when `RUST_LOG` is unset.
pub const DEFAULT_FILE_FILTER: &str = "info,word_scramble=debug,word_scramble_core=debug";

/// Filter used for stderr when `RUST_LOG` is unset.
pub const DEFAULT_STDERR_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Routes tracing output to `path`, truncating it.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    // Don't panic if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILE_FILTER))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(path = %path.display(), "File logging initialized");
    Ok(())
}

/// Routes tracing output to stderr.
#[instrument]
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter(DEFAULT_STDERR_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
