//! Core domain types for word scramble.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimum number of letters an accepted word must have.
pub const MIN_WORD_LENGTH: usize = 3;

/// Natural language a dictionary lookup is performed in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// English (`en`).
    #[default]
    #[serde(rename = "en", alias = "english", alias = "English")]
    #[strum(to_string = "English", serialize = "en")]
    English,
}

impl Language {
    /// Returns the ISO 639-1 code for this language.
    #[instrument]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

/// A submitted word after canonicalization.
///
/// Raw input is lowercased and trimmed of surrounding whitespace and
/// newlines. Every rule judges this form, never the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", word)]
pub struct Candidate {
    word: String,
}

impl Candidate {
    /// Canonicalizes raw user input.
    #[instrument]
    pub fn canonicalize(raw: &str) -> Self {
        Self {
            word: raw.to_lowercase().trim().to_string(),
        }
    }

    /// Returns the canonical word.
    pub fn as_str(&self) -> &str {
        &self.word
    }

    /// Number of letters (characters, not bytes).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Returns true if nothing but whitespace was submitted.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Consumes the candidate, returning the canonical word.
    pub fn into_inner(self) -> String {
        self.word
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.word
    }
}
