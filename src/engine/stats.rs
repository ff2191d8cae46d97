//! Lifetime statistics
//!
//! Aggregates persist across games and are updated exactly once per
//! completed game, at the moment a live submission ends it. The update is
//! a pure function from the old value to the new one.

use super::round::Outcome;
use crate::engine::ROWS;
use serde::{Deserialize, Serialize};

/// How many games ended on each round, plus the fail bucket
///
/// Serialized with the `"1"`..`"6"`/`"fail"` keys of the persisted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistogram {
    #[serde(rename = "1")]
    pub one: u32,
    #[serde(rename = "2")]
    pub two: u32,
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "5")]
    pub five: u32,
    #[serde(rename = "6")]
    pub six: u32,
    pub fail: u32,
}

impl GuessHistogram {
    fn bump_row(&mut self, row: usize) {
        match row {
            0 => self.one += 1,
            1 => self.two += 1,
            2 => self.three += 1,
            3 => self.four += 1,
            4 => self.five += 1,
            _ => self.six += 1,
        }
    }

    /// Sum across all buckets, equal to the number of games played
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.one + self.two + self.three + self.four + self.five + self.six + self.fail
    }

    /// The per-round buckets in order, without the fail bucket
    #[must_use]
    pub const fn rows(&self) -> [u32; ROWS] {
        [self.one, self.two, self.three, self.four, self.five, self.six]
    }
}

/// Lifetime aggregate statistics, persisted across games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    /// Integer percentage, floored
    pub win_percentage: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub guesses: GuessHistogram,
}

impl Statistics {
    /// Fold one completed game into the aggregates
    ///
    /// `outcome` must be terminal; an in-progress outcome returns the
    /// statistics unchanged.
    #[must_use]
    pub fn record(mut self, outcome: Outcome) -> Self {
        debug_assert!(outcome.is_terminal(), "record requires a finished game");

        match outcome {
            Outcome::InProgress => return self,
            Outcome::Won(row) => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.guesses.bump_row(row);
            }
            Outcome::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
                self.guesses.fail += 1;
            }
        }
        self.win_percentage = self.games_won * 100 / self.games_played;
        self.max_streak = self.max_streak.max(self.current_streak);
        self
    }
}
