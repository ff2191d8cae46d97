//! Jyutle
//!
//! A daily word-guessing game over two-syllable Jyutping words. Each word
//! occupies six grid cells (initial/final/tone twice); the engine evaluates
//! guesses with exact duplicate-symbol semantics, enforces the optional
//! hard-mode replay constraint, and persists game state and lifetime
//! statistics through an injected key-value store.
//!
//! # Quick Start
//!
//! ```rust
//! use jyutle::core::{GuessedMap, Symbol, Tag};
//! use jyutle::engine::evaluate;
//!
//! let to_row = |tokens: [&str; 6]| tokens.map(|t| Symbol::new(t).unwrap());
//! let answer = to_row(["s", "ik", "6", "f", "aan", "6"]);
//! let guess = to_row(["s", "ing", "1", "k", "ei", "4"]);
//!
//! let (evaluation, guessed) = evaluate(&guess, &answer, &GuessedMap::new());
//! assert_eq!(evaluation[0], Tag::Correct);
//! assert_eq!(guessed.get(&Symbol::new("s").unwrap()), Some(Tag::Correct));
//! ```

// Core domain types
pub mod core;

// Guess evaluation and round progression
pub mod engine;

// Word lookup and answer selection
pub mod dictionary;

// Persistence capability and game sessions
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
