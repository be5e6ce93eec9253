//! Word scramble game logic.
//!
//! The player is given a random root word and scores by submitting other
//! words spelled from its letters. This crate holds the game itself, with no
//! terminal or CLI concerns:
//!
//! - **Word source**: loads the root word list and picks a random root word
//! - **Dictionary**: the [`Dictionary`] capability and a word-list implementation
//! - **Rules**: pure predicates, composed into an ordered chain by [`LegalWord`]
//! - **Session**: [`GameSession`] holds the root word and accepted history
//!
//! # Example
//!
//! ```
//! use word_scramble_core::{
//!     GameSession, Language, RejectionKind, WordList, WordListDictionary, WordSource,
//! };
//!
//! let source = WordSource::new(WordList::from_words(["listen"]));
//! let dictionary = WordListDictionary::from_words(["listen", "tin", "silent"], Language::English);
//! let mut session = GameSession::with_root_word(source, dictionary, "listen");
//!
//! session.submit("tin").unwrap();
//! let rejection = session.submit("tin").unwrap_err();
//! assert_eq!(rejection.kind(), &RejectionKind::Unoriginal);
//! assert_eq!(session.score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod dictionary;
mod invariants;
mod rejection;
pub mod rules;
mod session;
mod types;
mod word_source;

// Crate-level exports - Domain types
pub use types::{Candidate, Language, MIN_WORD_LENGTH};

// Crate-level exports - Word source
pub use word_source::{DEFAULT_ROOT_WORD, WordList, WordListError, WordSource};

// Crate-level exports - Dictionary capability
pub use dictionary::{Dictionary, WordListDictionary};

// Crate-level exports - Validation
pub use contracts::{IsOriginal, IsPossible, IsReal, LegalWord, LongEnough, NotRootWord, RuleContext};
pub use rejection::{Rejection, RejectionKind};

// Crate-level exports - Invariants
pub use invariants::{
    DerivableHistoryInvariant, Invariant, InvariantSet, InvariantViolation, KnownWordsInvariant,
    MinLengthInvariant, RootExcludedInvariant, RootNonEmptyInvariant, SessionInvariants,
    UniqueHistoryInvariant,
};

// Crate-level exports - Session
pub use session::{Accepted, GameSession, SessionSnapshot};
