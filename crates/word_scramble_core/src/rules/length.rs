//! Minimum length rule.

use crate::types::MIN_WORD_LENGTH;
use tracing::instrument;

/// Checks that `word` has at least [`MIN_WORD_LENGTH`] letters.
#[instrument]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}
