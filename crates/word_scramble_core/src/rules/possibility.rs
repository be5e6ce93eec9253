//! Letter availability rule.

use tracing::instrument;

/// Checks that every letter of `word` can be taken from `root_word`.
///
/// Each letter consumes the first unused matching occurrence in the root,
/// so a letter can be used at most as many times as the root contains it.
#[instrument]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut remaining: Vec<char> = root_word.to_lowercase().chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }

    true
}
