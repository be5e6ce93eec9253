//! Dictionary capability: answers "is this a real word?".
//!
//! The game treats the dictionary as a black box behind the [`Dictionary`]
//! trait. [`WordListDictionary`] is the shipped implementation: set
//! membership over a newline-delimited word file.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::types::Language;
use crate::word_source::{WordListError, parse_words, read_words};

/// A capability that reports whether a string is a known word.
///
/// Implementations must accept arbitrary input without panicking and
/// answer `false` for anything they cannot vouch for.
pub trait Dictionary {
    /// Returns `true` if `word` is a valid word in `language`.
    fn is_known_word(&self, word: &str, language: Language) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Dictionary backed by an in-memory word set for a single language.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: Language,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Loads a newline-delimited dictionary file.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the file is missing or unreadable.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, language: Language) -> Result<Self, WordListError> {
        debug!("Loading dictionary");
        let words: HashSet<String> = read_words(path.as_ref())?.into_iter().collect();
        info!(count = words.len(), %language, "Dictionary loaded");
        Ok(Self { language, words })
    }

    /// Parses a dictionary from in-memory newline-delimited text.
    #[instrument(skip(content))]
    pub fn parse(content: &str, language: Language) -> Self {
        Self {
            language,
            words: parse_words(content).into_iter().collect(),
        }
    }

    /// Builds a dictionary from in-memory words.
    pub fn from_words<I, S>(words: I, language: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language,
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Returns the language this dictionary answers for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no words are known.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    #[instrument(skip(self))]
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        language == self.language && self.words.contains(word)
    }
}
