//! Session startup from configuration.

use anyhow::{Context, Result};
use tracing::{info, instrument};
use word_scramble_core::{GameSession, WordListDictionary, WordSource};

use crate::config::GameConfig;

/// Loads the word list and dictionary named by `config` and starts a session.
///
/// # Errors
///
/// Fails if either file is missing or unreadable. Without a word list there
/// is nothing to play, so callers treat this as fatal.
#[instrument(skip(config), fields(word_list = %config.word_list().display()))]
pub fn start_session(config: &GameConfig) -> Result<GameSession<WordListDictionary>> {
    let source = WordSource::load(config.word_list()).with_context(|| {
        format!(
            "Could not load root word list from {}",
            config.word_list().display()
        )
    })?;

    let dictionary = WordListDictionary::load(config.dictionary(), *config.language())
        .with_context(|| {
            format!(
                "Could not load dictionary from {}",
                config.dictionary().display()
            )
        })?;

    let session = GameSession::new(source, dictionary).with_language(*config.language());
    info!(root_word = %session.root_word(), "Game ready");
    Ok(session)
}
