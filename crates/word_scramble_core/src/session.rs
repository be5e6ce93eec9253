//! Game session state and submission handling.

use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::contracts::{LegalWord, RuleContext, assert_invariants};
use crate::dictionary::Dictionary;
use crate::rejection::Rejection;
use crate::types::{Candidate, Language};
use crate::word_source::{DEFAULT_ROOT_WORD, WordSource};

/// A word the session just accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Accepted {
    /// The canonical word that was added to the history.
    word: String,
    /// Score after accepting the word.
    score: usize,
}

/// Serializable view of a session for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionSnapshot {
    /// Current root word.
    root_word: String,
    /// Accepted words, most recent first.
    used_words: Vec<String>,
    /// Number of accepted words.
    score: usize,
}

/// One round of word scramble.
///
/// Holds the current root word and the words accepted against it. A session
/// moves from idle to validating on [`submit`](Self::submit) and straight back
/// to idle with either an accepted word or a [`Rejection`]; nothing else about
/// the session changes on rejection. [`reset`](Self::reset) draws a new root
/// word and clears the history.
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    source: WordSource,
    dictionary: D,
    language: Language,
    pub(crate) root_word: String,
    pub(crate) used_words: Vec<String>,
}

impl<D: Dictionary> GameSession<D> {
    /// Starts a session with a random root word from `source`.
    #[instrument(skip(source, dictionary))]
    pub fn new(source: WordSource, dictionary: D) -> Self {
        let root_word = source.pick_random();
        Self::with_root_word(source, dictionary, root_word)
    }

    /// Starts a session with a root word chosen by `rng`.
    #[instrument(skip(source, dictionary, rng))]
    pub fn with_rng<R: Rng + ?Sized>(source: WordSource, dictionary: D, rng: &mut R) -> Self {
        let root_word = source.pick_random_with(rng);
        Self::with_root_word(source, dictionary, root_word)
    }

    /// Starts a session with a fixed root word.
    ///
    /// The root word is lowercased and trimmed. A root that is blank after
    /// trimming is replaced by [`DEFAULT_ROOT_WORD`].
    #[instrument(skip(source, dictionary, root_word))]
    pub fn with_root_word(source: WordSource, dictionary: D, root_word: impl Into<String>) -> Self {
        let mut root_word = root_word.into().trim().to_lowercase();
        if root_word.is_empty() {
            warn!(default = DEFAULT_ROOT_WORD, "Blank root word, using default");
            root_word = DEFAULT_ROOT_WORD.to_string();
        }
        info!(root_word = %root_word, "Session started");
        let session = Self {
            source,
            dictionary,
            language: Language::default(),
            root_word,
            used_words: Vec::new(),
        };
        assert_invariants(&session);
        session
    }

    /// Sets the language used for dictionary lookups.
    #[instrument(skip(self))]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Returns the current root word.
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Returns accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Returns the score: the number of accepted words.
    pub fn score(&self) -> usize {
        self.used_words.len()
    }

    /// Returns the dictionary language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the dictionary.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Returns the word source used on reset.
    pub fn source(&self) -> &WordSource {
        &self.source
    }

    /// Submits raw user input.
    ///
    /// The input is canonicalized and run through the rule chain. On success
    /// the word is inserted at the front of the history.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing rule. The session is
    /// unchanged in that case.
    #[instrument(skip(self), fields(root_word = %self.root_word))]
    pub fn submit(&mut self, raw: &str) -> Result<Accepted, Rejection> {
        let candidate = Candidate::canonicalize(raw);
        debug!(candidate = %candidate, "Validating submission");

        let ctx = RuleContext {
            root_word: &self.root_word,
            used_words: &self.used_words,
            dictionary: &self.dictionary,
            language: self.language,
        };
        if let Err(rejection) = LegalWord::check(&candidate, &ctx) {
            info!(kind = %rejection.kind(), candidate = %candidate, "Submission rejected");
            return Err(rejection);
        }

        let word = candidate.into_inner();
        self.used_words.insert(0, word.clone());
        info!(word = %word, score = self.score(), "Submission accepted");

        assert_invariants(self);

        Ok(Accepted {
            word,
            score: self.score(),
        })
    }

    /// Draws a new root word and clears the history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::thread_rng());
    }

    /// Draws a new root word with `rng` and clears the history.
    #[instrument(skip(self, rng))]
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.root_word = self.source.pick_random_with(rng);
        self.used_words.clear();
        info!(root_word = %self.root_word, "Session reset");
        assert_invariants(self);
    }

    /// Returns a serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::rejection::RejectionKind;
    use crate::word_source::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn listen_session() -> GameSession<WordListDictionary> {
        GameSession::with_root_word(
            WordSource::new(WordList::from_words(["listen", "silent", "enlist"])),
            WordListDictionary::from_words(["listen", "tin", "silent"], Language::English),
            "listen",
        )
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = listen_session();
        assert_eq!(session.root_word(), "listen");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_accepted_word_goes_first() {
        let mut session = listen_session();
        let accepted = session.submit("tin").expect("tin is legal");
        assert_eq!(accepted.word(), "tin");
        assert_eq!(*accepted.score(), 1);

        session.submit("Silent").expect("silent is legal");
        assert_eq!(session.used_words(), ["silent", "tin"]);
    }

    #[test]
    fn test_rejection_leaves_session_unchanged() {
        let mut session = listen_session();
        session.submit("tin").expect("tin is legal");
        let before = session.snapshot();

        let rejection = session.submit("zzz").unwrap_err();
        assert_eq!(rejection.kind(), &RejectionKind::NotReal);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_root_word_is_normalized() {
        let session = GameSession::with_root_word(
            WordSource::new(WordList::default()),
            WordListDictionary::default(),
            "  Listen\n",
        );
        assert_eq!(session.root_word(), "listen");
    }

    #[test]
    fn test_reset_clears_history() {
        let mut session = listen_session();
        session.submit("tin").expect("tin is legal");

        let mut rng = StdRng::seed_from_u64(42);
        session.reset_with(&mut rng);
        assert!(session.used_words().is_empty());
        assert!(session.source().list().contains(session.root_word()));
    }

    #[test]
    fn test_with_rng_picks_from_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let session = GameSession::with_rng(
            WordSource::new(WordList::from_words(["alpha", "bravo"])),
            WordListDictionary::default(),
            &mut rng,
        );
        assert!(["alpha", "bravo"].contains(&session.root_word()));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = listen_session();
        session.submit("tin").expect("tin is legal");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.root_word(), "listen");
        assert_eq!(snapshot.used_words(), &vec!["tin".to_string()]);
        assert_eq!(*snapshot.score(), 1);
    }
}
