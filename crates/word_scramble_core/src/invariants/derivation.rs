//! Derivation invariants: accepted words come from the root and the dictionary.

use super::Invariant;
use crate::dictionary::Dictionary;
use crate::rules::is_possible;
use crate::session::GameSession;

/// Invariant: every accepted word can be spelled from the root's letters.
pub struct DerivableHistoryInvariant;

impl<D: Dictionary> Invariant<GameSession<D>> for DerivableHistoryInvariant {
    fn holds(session: &GameSession<D>) -> bool {
        session
            .used_words()
            .iter()
            .all(|w| is_possible(w, session.root_word()))
    }

    fn description() -> &'static str {
        "Accepted words are spelled from the root word's letters"
    }
}

/// Invariant: every accepted word is known to the dictionary.
pub struct KnownWordsInvariant;

impl<D: Dictionary> Invariant<GameSession<D>> for KnownWordsInvariant {
    fn holds(session: &GameSession<D>) -> bool {
        session
            .used_words()
            .iter()
            .all(|w| session.dictionary().is_known_word(w, session.language()))
    }

    fn description() -> &'static str {
        "Accepted words are known to the dictionary"
    }
}
