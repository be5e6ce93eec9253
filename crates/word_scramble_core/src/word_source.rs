//! Root word list loading and random root selection.

use std::path::Path;

use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Root word used when the word list has nothing to offer.
pub const DEFAULT_ROOT_WORD: &str = "warriors";

/// Word list error with location tracking.
///
/// Raised only while loading a list at startup; there is no meaningful
/// recovery, so callers propagate it out of `main`.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reads a newline-delimited word file into normalized words.
///
/// Shared by [`WordList::load`] and the word-list dictionary.
#[track_caller]
pub(crate) fn read_words(path: &Path) -> Result<Vec<String>, WordListError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        WordListError::new(format!(
            "Failed to read word list {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_words(&content))
}

/// Splits text on line boundaries, lowercasing and trimming each line.
///
/// Blank lines are dropped.
pub(crate) fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Ordered list of candidate root words, immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Loads a newline-delimited word list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the file is missing or unreadable.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        debug!("Loading word list");
        let words = read_words(path)?;
        if words.is_empty() {
            warn!(path = %path.display(), "Word list is empty, root word will fall back to default");
        }
        info!(count = words.len(), "Word list loaded");
        Ok(Self { words })
    }

    /// Parses a word list from in-memory text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Self {
        Self {
            words: parse_words(content),
        }
    }

    /// Builds a word list from in-memory words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Returns all words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Owns the word list and hands out random root words.
#[derive(Debug, Clone)]
pub struct WordSource {
    list: WordList,
}

impl WordSource {
    /// Creates a word source over an already loaded list.
    #[instrument(skip(list), fields(count = list.len()))]
    pub fn new(list: WordList) -> Self {
        Self { list }
    }

    /// Loads the word list at `path` and wraps it in a source.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the file is missing or unreadable.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        WordList::load(path).map(Self::new)
    }

    /// Returns the underlying word list.
    pub fn list(&self) -> &WordList {
        &self.list
    }

    /// Picks a uniformly random root word using the thread-local RNG.
    #[instrument(skip(self))]
    pub fn pick_random(&self) -> String {
        self.pick_random_with(&mut rand::thread_rng())
    }

    /// Picks a uniformly random root word using the given RNG.
    ///
    /// Falls back to [`DEFAULT_ROOT_WORD`] when the list is empty.
    #[instrument(skip(self, rng))]
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self.list.words().choose(rng) {
            Some(word) => {
                debug!(word = %word, "Picked root word");
                word.clone()
            }
            None => {
                warn!(fallback = DEFAULT_ROOT_WORD, "Word list empty, using default root word");
                DEFAULT_ROOT_WORD.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_skips_blank_lines_and_normalizes() {
        let list = WordList::parse("Listen\n\n  silent \r\nTIN\n");
        assert_eq!(list.words(), ["listen", "silent", "tin"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(WordList::parse("").is_empty());
        assert!(WordList::parse("\n\n").is_empty());
    }

    #[test]
    fn test_pick_random_returns_member() {
        let source = WordSource::new(WordList::from_words(["alpha", "bravo", "charlie"]));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = source.pick_random_with(&mut rng);
            assert!(source.list().contains(&word));
        }
    }

    #[test]
    fn test_pick_random_empty_falls_back() {
        let source = WordSource::new(WordList::default());
        assert_eq!(source.pick_random(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = WordList::load("/definitely/not/here/start.txt");
        let err = result.expect_err("missing file must fail");
        assert!(err.message.contains("Failed to read word list"));
    }
}
