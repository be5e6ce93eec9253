//! Rejection reasons for submitted words.
//!
//! A rejection is a user-recoverable outcome: the session is untouched and
//! the player may retry. Each kind carries a short title and a descriptive
//! message meant to be shown in a dismissible notice.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Candidate, Language, MIN_WORD_LENGTH};

/// Why a submission was rejected, in rule-chain order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum RejectionKind {
    /// Fewer than [`MIN_WORD_LENGTH`] letters.
    TooShort,
    /// Already accepted earlier in the session.
    Unoriginal,
    /// Not found by the dictionary.
    NotReal,
    /// Uses letters the root word cannot supply.
    NotPossible,
    /// Identical to the root word.
    SameAsRoot,
}

/// A rejected submission with its user-facing title and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Display, Error)]
#[display("{}: {}", title, message)]
pub struct Rejection {
    /// Which rule rejected the word.
    kind: RejectionKind,
    /// Short headline.
    title: String,
    /// Descriptive message.
    message: String,
}

impl Rejection {
    /// The word has fewer than [`MIN_WORD_LENGTH`] letters.
    #[instrument]
    pub fn too_short() -> Self {
        Self {
            kind: RejectionKind::TooShort,
            title: "Too short!".to_string(),
            message: format!("Word must contain at least {} letters", MIN_WORD_LENGTH),
        }
    }

    /// The word was already accepted this session.
    #[instrument]
    pub fn unoriginal(word: &Candidate) -> Self {
        Self {
            kind: RejectionKind::Unoriginal,
            title: "Unoriginal!".to_string(),
            message: format!("You've already entered {}, please enter a unique one.", word),
        }
    }

    /// The dictionary does not know the word.
    #[instrument]
    pub fn not_real(language: Language) -> Self {
        Self {
            kind: RejectionKind::NotReal,
            title: "Not a real word!".to_string(),
            message: format!(
                "Please use a real word that can be found in the {} dictionary.",
                language
            ),
        }
    }

    /// The root word cannot supply the word's letters.
    #[instrument]
    pub fn not_possible(word: &Candidate, root_word: &str) -> Self {
        Self {
            kind: RejectionKind::NotPossible,
            title: "Not in the rootword!".to_string(),
            message: format!("{} is not contained in {} by any means.", word, root_word),
        }
    }

    /// The word is the root word itself.
    #[instrument]
    pub fn same_as_root(root_word: &str) -> Self {
        Self {
            kind: RejectionKind::SameAsRoot,
            title: format!("Entering {} isn't allowed!", root_word),
            message: "You must give out a new word aside from the one given to you".to_string(),
        }
    }
}
