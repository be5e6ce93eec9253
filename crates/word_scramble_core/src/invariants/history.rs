//! Shape invariants on the accepted-word history.

use std::collections::HashSet;

use super::Invariant;
use crate::dictionary::Dictionary;
use crate::session::GameSession;
use crate::types::MIN_WORD_LENGTH;

/// Invariant: the root word is never blank.
pub struct RootNonEmptyInvariant;

impl<D: Dictionary> Invariant<GameSession<D>> for RootNonEmptyInvariant {
    fn holds(session: &GameSession<D>) -> bool {
        !session.root_word().trim().is_empty()
    }

    fn description() -> &'static str {
        "Root word is not empty"
    }
}

/// Invariant: the root word never appears in the history.
pub struct RootExcludedInvariant;

impl<D: Dictionary> Invariant<GameSession<D>> for RootExcludedInvariant {
    fn holds(session: &GameSession<D>) -> bool {
        !session.used_words().iter().any(|w| w == session.root_word())
    }

    fn description() -> &'static str {
        "Root word is never an accepted word"
    }
}

/// Invariant: no word is accepted twice.
pub struct UniqueHistoryInvariant;

impl<D: Dictionary> Invariant<GameSession<D>> for UniqueHistoryInvariant {
    fn holds(session: &GameSession<D>) -> bool {
        let mut seen = HashSet::new();
        session.used_words().iter().all(|w| seen.insert(w.as_str()))
    }

    fn description() -> &'static str {
        "Accepted words are unique"
    }
}

/// Invariant: every accepted word has at least three letters.
pub struct MinLengthInvariant;

impl<D: Dictionary> Invariant<GameSession<D>> for MinLengthInvariant {
    fn holds(session: &GameSession<D>) -> bool {
        session
            .used_words()
            .iter()
            .all(|w| w.chars().count() >= MIN_WORD_LENGTH)
    }

    fn description() -> &'static str {
        "Accepted words have at least three letters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, WordList, WordListDictionary, WordSource};

    fn session() -> GameSession<WordListDictionary> {
        GameSession::with_root_word(
            WordSource::new(WordList::default()),
            WordListDictionary::from_words(["tin", "silent"], Language::English),
            "listen",
        )
    }

    #[test]
    fn test_empty_history_holds() {
        let session = session();
        assert!(RootNonEmptyInvariant::holds(&session));
        assert!(RootExcludedInvariant::holds(&session));
        assert!(UniqueHistoryInvariant::holds(&session));
        assert!(MinLengthInvariant::holds(&session));
    }

    #[test]
    fn test_blank_root_violates_non_empty() {
        let mut session = session();
        session.root_word = "   ".to_string();
        assert!(!RootNonEmptyInvariant::holds(&session));
    }

    #[test]
    fn test_duplicate_violates_uniqueness() {
        let mut session = session();
        session.used_words = vec!["tin".to_string(), "tin".to_string()];
        assert!(!UniqueHistoryInvariant::holds(&session));
        assert!(RootExcludedInvariant::holds(&session));
    }

    #[test]
    fn test_root_in_history_violates() {
        let mut session = session();
        session.used_words = vec!["listen".to_string()];
        assert!(!RootExcludedInvariant::holds(&session));
    }

    #[test]
    fn test_short_word_violates_length() {
        let mut session = session();
        session.used_words = vec!["ti".to_string()];
        assert!(!MinLengthInvariant::holds(&session));
    }
}
