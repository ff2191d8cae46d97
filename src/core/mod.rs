//! Core domain types for the syllable-guessing game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear semantics.

mod symbol;
mod tag;
mod word;

pub use symbol::{INITIALS, Symbol, SymbolError};
pub use tag::{Evaluation, GuessedMap, Tag, WORD_LEN, all_correct};
pub use word::{Entry, EntryError};
