//! Identity rule: the root word itself does not count.

use tracing::instrument;

/// Returns `true` if `word` is exactly the root word.
#[instrument]
pub fn is_root_word(word: &str, root_word: &str) -> bool {
    word == root_word
}
