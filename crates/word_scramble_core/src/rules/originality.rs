//! Originality rule: a word may only be scored once per session.

use tracing::instrument;

/// Checks that `word` has not already been accepted.
#[instrument(skip(used_words))]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}
