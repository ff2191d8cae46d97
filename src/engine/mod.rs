//! Guess evaluation and round progression
//!
//! The engine is pure and synchronous: evaluation, hard-mode validation,
//! the round state machine, and lifetime statistics. Persistence and
//! presentation live elsewhere and talk to the engine through plain values.

pub mod evaluate;
pub mod hard_mode;
pub mod round;
pub mod stats;

pub use evaluate::evaluate;
pub use hard_mode::{Violation, validate};
pub use round::{Cursor, Game, Outcome, ROWS, SubmitError, SubmitSuccess};
pub use stats::{GuessHistogram, Statistics};
