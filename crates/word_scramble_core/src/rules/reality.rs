//! Reality rule: the dictionary must know the word.

use crate::dictionary::Dictionary;
use crate::types::Language;
use tracing::instrument;

/// Checks that `dictionary` knows `word` in `language`.
#[instrument(skip(dictionary))]
pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D, language: Language) -> bool {
    dictionary.is_known_word(word, language)
}
