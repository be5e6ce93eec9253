//! Property tests for the rule chain ordering.

use proptest::prelude::*;
use word_scramble_core::{
    GameSession, Language, RejectionKind, WordList, WordListDictionary, WordSource, rules,
};

const ROOT: &str = "painters";

/// A dictionary that knows every word that could be submitted here, so only
/// the letter rules decide.
fn permissive_session(words: &[String]) -> GameSession<WordListDictionary> {
    let mut known: Vec<String> = words.to_vec();
    known.push(ROOT.to_string());
    GameSession::with_root_word(
        WordSource::new(WordList::from_words([ROOT])),
        WordListDictionary::from_words(known, Language::English),
        ROOT,
    )
}

/// Words spelled from a shuffled prefix of the root's letters, never the root itself.
fn derivable_word() -> impl Strategy<Value = String> {
    let letters: Vec<char> = ROOT.chars().collect();
    (Just(letters).prop_shuffle(), 3..ROOT.len())
        .prop_map(|(letters, len)| letters.into_iter().take(len).collect())
}

proptest! {
    #[test]
    fn prop_short_words_always_too_short(word in "[a-z]{0,2}", padding in "[ \t\n]{0,3}") {
        let mut session = permissive_session(&[word.clone()]);
        let raw = format!("{padding}{word}{padding}");
        let rejection = session.submit(&raw).unwrap_err();
        prop_assert_eq!(rejection.kind(), &RejectionKind::TooShort);
    }

    #[test]
    fn prop_repeat_is_unoriginal(word in derivable_word()) {
        let mut session = permissive_session(&[word.clone()]);
        session.submit(&word).unwrap();
        let rejection = session.submit(&word).unwrap_err();
        prop_assert_eq!(rejection.kind(), &RejectionKind::Unoriginal);
        prop_assert_eq!(session.score(), 1);
    }

    #[test]
    fn prop_impossible_words_rejected(word in "[a-z]{3,10}") {
        prop_assume!(!rules::is_possible(&word, ROOT));
        let mut session = permissive_session(&[word.clone()]);
        let rejection = session.submit(&word).unwrap_err();
        prop_assert_eq!(rejection.kind(), &RejectionKind::NotPossible);
    }

    #[test]
    fn prop_unknown_words_not_real(word in "[a-z]{3,10}") {
        prop_assume!(word != ROOT);
        let mut session = GameSession::with_root_word(
            WordSource::new(WordList::default()),
            WordListDictionary::from_words([ROOT], Language::English),
            ROOT,
        );
        let rejection = session.submit(&word).unwrap_err();
        prop_assert_eq!(rejection.kind(), &RejectionKind::NotReal);
    }

    #[test]
    fn prop_accepted_words_most_recent_first(
        words in proptest::collection::vec(derivable_word(), 1..6)
    ) {
        let mut session = permissive_session(&words);
        let mut expected: Vec<String> = Vec::new();
        for word in &words {
            if session.submit(word).is_ok() {
                expected.insert(0, word.clone());
            }
        }
        prop_assert_eq!(session.used_words(), expected.as_slice());
        prop_assert_eq!(session.score(), expected.len());
    }
}
