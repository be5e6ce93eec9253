//! Word rules for word scramble.
//!
//! Each rule is a pure predicate over a canonical word and whatever session
//! state it needs. Rules are kept apart from the session so that the
//! validation chain in [`crate::contracts`] can compose them in a fixed
//! order.

pub mod identity;
pub mod length;
pub mod originality;
pub mod possibility;
pub mod reality;

pub use identity::is_root_word;
pub use length::is_long_enough;
pub use originality::is_original;
pub use possibility::is_possible;
pub use reality::is_real;
