//! Hard-mode replay constraint
//!
//! When hard mode is on, every round after the first must reuse the
//! information revealed by the previous round: symbols tagged `Correct`
//! stay pinned to their positions, and symbols tagged `Present` must
//! appear somewhere outside the pinned positions.

use crate::core::{Evaluation, Symbol, Tag, WORD_LEN};
use std::fmt;

/// A hard-mode violation, reported for the first offending position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A previously correct symbol was moved off its position (0-based)
    MustMatch { position: usize, symbol: Symbol },
    /// A previously present symbol is missing from the guess
    MustContain { symbol: Symbol },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MustMatch { position, symbol } => {
                write!(f, "第 {} 個字要係 {}", position + 1, symbol.as_str().to_uppercase())
            }
            Self::MustContain { symbol } => {
                write!(f, "一定要包括 {}", symbol.as_str().to_uppercase())
            }
        }
    }
}

/// Check a guess against the previous round's guess and evaluation
///
/// Positions are scanned in ascending order and the first violation wins.
/// The `MustContain` scan excludes positions of the current guess that are
/// pinned `Correct` by the previous evaluation, so a pinned symbol cannot
/// double as the required loose copy.
///
/// # Errors
/// Returns the first `Violation` found, if any.
pub fn validate(
    current: &[Symbol; WORD_LEN],
    previous: &[Symbol; WORD_LEN],
    previous_eval: &Evaluation,
) -> Result<(), Violation> {
    let unpinned: Vec<&Symbol> = (0..WORD_LEN)
        .filter(|&i| previous_eval[i] != Tag::Correct)
        .map(|i| &current[i])
        .collect();

    for i in 0..WORD_LEN {
        match previous_eval[i] {
            Tag::Absent => {}
            Tag::Correct => {
                if previous[i] != current[i] {
                    return Err(Violation::MustMatch {
                        position: i,
                        symbol: previous[i].clone(),
                    });
                }
            }
            Tag::Present => {
                if !unpinned.contains(&&previous[i]) {
                    return Err(Violation::MustContain {
                        symbol: previous[i].clone(),
                    });
                }
            }
        }
    }

    Ok(())
}
