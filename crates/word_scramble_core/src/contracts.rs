//! Contract-based validation for submitted words.
//!
//! Each precondition wraps one rule from [`crate::rules`] and turns a
//! failing predicate into a typed [`Rejection`]. [`LegalWord`] composes them
//! in the fixed order the game reports failures in; the first failure wins.

use crate::dictionary::Dictionary;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rejection::Rejection;
use crate::rules;
use crate::session::GameSession;
use crate::types::{Candidate, Language};
use tracing::{instrument, warn};

/// Read-only view of the session state the rules judge against.
#[derive(Debug)]
pub struct RuleContext<'a, D: ?Sized> {
    /// Current root word, lowercase.
    pub root_word: &'a str,
    /// Accepted words, most recent first.
    pub used_words: &'a [String],
    /// Dictionary consulted by [`IsReal`].
    pub dictionary: &'a D,
    /// Language passed to the dictionary.
    pub language: Language,
}

// ─────────────────────────────────────────────────────────────
//  Word Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the word has at least three letters.
pub struct LongEnough;

impl LongEnough {
    /// Rejects words that are too short.
    #[instrument(skip(word), fields(word = %word))]
    pub fn check(word: &Candidate) -> Result<(), Rejection> {
        if rules::is_long_enough(word.as_str()) {
            Ok(())
        } else {
            Err(Rejection::too_short())
        }
    }
}

/// Precondition: the word has not been accepted before.
pub struct IsOriginal;

impl IsOriginal {
    /// Rejects words already in the history.
    #[instrument(skip(word, used_words), fields(word = %word))]
    pub fn check(word: &Candidate, used_words: &[String]) -> Result<(), Rejection> {
        if rules::is_original(word.as_str(), used_words) {
            Ok(())
        } else {
            Err(Rejection::unoriginal(word))
        }
    }
}

/// Precondition: the dictionary knows the word.
pub struct IsReal;

impl IsReal {
    /// Rejects words the dictionary does not know.
    #[instrument(skip(word, dictionary), fields(word = %word))]
    pub fn check<D: Dictionary + ?Sized>(
        word: &Candidate,
        dictionary: &D,
        language: Language,
    ) -> Result<(), Rejection> {
        if rules::is_real(word.as_str(), dictionary, language) {
            Ok(())
        } else {
            Err(Rejection::not_real(language))
        }
    }
}

/// Precondition: the root word can supply every letter.
pub struct IsPossible;

impl IsPossible {
    /// Rejects words that need letters the root does not have.
    #[instrument(skip(word), fields(word = %word))]
    pub fn check(word: &Candidate, root_word: &str) -> Result<(), Rejection> {
        if rules::is_possible(word.as_str(), root_word) {
            Ok(())
        } else {
            Err(Rejection::not_possible(word, root_word))
        }
    }
}

/// Precondition: the word is not the root word itself.
pub struct NotRootWord;

impl NotRootWord {
    /// Rejects the root word.
    #[instrument(skip(word), fields(word = %word))]
    pub fn check(word: &Candidate, root_word: &str) -> Result<(), Rejection> {
        if rules::is_root_word(word.as_str(), root_word) {
            Err(Rejection::same_as_root(root_word))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a word is legal if every rule passes.
///
/// Order: length, originality, dictionary, letters, identity.
pub struct LegalWord;

impl LegalWord {
    /// Validates all preconditions for a submission.
    #[instrument(skip(word, ctx), fields(word = %word, root_word = %ctx.root_word))]
    pub fn check<D: Dictionary + ?Sized>(
        word: &Candidate,
        ctx: &RuleContext<'_, D>,
    ) -> Result<(), Rejection> {
        LongEnough::check(word)?;
        IsOriginal::check(word, ctx.used_words)?;
        IsReal::check(word, ctx.dictionary, ctx.language)?;
        IsPossible::check(word, ctx.root_word)?;
        NotRootWord::check(word, ctx.root_word)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Asserts that all session invariants hold (panics in debug builds).
#[instrument(skip(session))]
pub fn assert_invariants<D: Dictionary>(session: &GameSession<D>) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            warn!(description = %violation.description, "Session invariant violated");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::rejection::RejectionKind;

    fn dict() -> WordListDictionary {
        WordListDictionary::from_words(["listen", "tin", "silent", "tint", "lit"], Language::English)
    }

    fn check(raw: &str, used: &[String]) -> Result<(), Rejection> {
        let dictionary = dict();
        let ctx = RuleContext {
            root_word: "listen",
            used_words: used,
            dictionary: &dictionary,
            language: Language::English,
        };
        LegalWord::check(&Candidate::canonicalize(raw), &ctx)
    }

    fn kind(result: Result<(), Rejection>) -> RejectionKind {
        *result.expect_err("expected rejection").kind()
    }

    #[test]
    fn test_legal_word_passes() {
        assert!(check("tin", &[]).is_ok());
        assert!(check("silent", &[]).is_ok());
    }

    #[test]
    fn test_too_short_wins_over_everything() {
        // Not real, not possible, and short: length is reported.
        assert_eq!(kind(check("zq", &[])), RejectionKind::TooShort);
    }

    #[test]
    fn test_unoriginal_before_dictionary() {
        let used = vec!["tin".to_string()];
        assert_eq!(kind(check("tin", &used)), RejectionKind::Unoriginal);
    }

    #[test]
    fn test_not_real_before_not_possible() {
        // "zzz" is neither real nor possible; dictionary is reported first.
        assert_eq!(kind(check("zzz", &[])), RejectionKind::NotReal);
    }

    #[test]
    fn test_not_possible() {
        // Real word, but "listen" has only one 't'.
        assert_eq!(kind(check("tint", &[])), RejectionKind::NotPossible);
    }

    #[test]
    fn test_same_as_root_is_last() {
        assert_eq!(kind(check("listen", &[])), RejectionKind::SameAsRoot);
        assert_eq!(kind(check("  LISTEN\n", &[])), RejectionKind::SameAsRoot);
    }

    #[test]
    fn test_individual_preconditions() {
        let word = Candidate::canonicalize("lit");
        assert!(LongEnough::check(&word).is_ok());
        assert!(IsOriginal::check(&word, &[]).is_ok());
        assert!(IsReal::check(&word, &dict(), Language::English).is_ok());
        assert!(IsPossible::check(&word, "listen").is_ok());
        assert!(NotRootWord::check(&word, "listen").is_ok());
    }
}
