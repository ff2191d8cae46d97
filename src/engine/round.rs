//! Round-by-round game state machine
//!
//! A `Game` owns one answer, the 6×6 board, the per-row evaluations, the
//! cumulative guessed map, and the cursor. Symbol entry, deletion, and row
//! submission are synchronous operations that run to completion; terminal
//! states reject all further mutation.

use super::evaluate::evaluate;
use super::hard_mode::{Violation, validate};
use crate::core::{Entry, Evaluation, GuessedMap, Symbol, WORD_LEN, all_correct};
use crate::dictionary::Dictionary;
use std::fmt;
use tracing::{debug, info};

/// Number of rounds per game
pub const ROWS: usize = 6;

/// Current row under entry and how many symbols are typed into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub entry: usize,
}

/// Game progression state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Won on the given 0-based row
    Won(usize),
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A recognized, evaluated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSuccess {
    /// The dictionary entry the row matched
    pub word: Entry,
    /// The row's evaluation
    pub evaluation: Evaluation,
    /// Outcome after the submission
    pub outcome: Outcome,
}

/// Why a submission was rejected
///
/// All variants are recoverable: the row stays editable, the cursor is
/// unchanged, and no board or evaluation state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Fewer than six symbols entered
    IncompleteRow,
    /// Hard mode replay constraint violated
    HardMode(Violation),
    /// The row matches no dictionary entry
    NotAWord,
    /// The game has already ended
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow => write!(f, "唔夠字數喎"),
            Self::HardMode(violation) => write!(f, "{violation}"),
            Self::NotAWord => write!(f, "揾唔到依個詞"),
            Self::GameOver => write!(f, "遊戲已經完咗"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One game against one answer
#[derive(Debug, Clone)]
pub struct Game {
    answer: Entry,
    board: [[Option<Symbol>; WORD_LEN]; ROWS],
    evaluations: [Option<Evaluation>; ROWS],
    guessed: GuessedMap,
    hard_mode: bool,
    cursor: Cursor,
    outcome: Outcome,
}

impl Game {
    /// Start a fresh game for the given answer
    #[must_use]
    pub fn new(answer: Entry, hard_mode: bool) -> Self {
        Self {
            answer,
            board: Default::default(),
            evaluations: [None; ROWS],
            guessed: GuessedMap::new(),
            hard_mode,
            cursor: Cursor { row: 0, entry: 0 },
            outcome: Outcome::InProgress,
        }
    }

    /// Rebuild a game from persisted parts
    ///
    /// The caller is responsible for having decided that the persisted
    /// answer identity matches `answer`; a stale snapshot must be discarded
    /// and a fresh game started instead. The entry cursor restarts at 0;
    /// partial row input is not resumed.
    #[must_use]
    pub fn resume(
        answer: Entry,
        hard_mode: bool,
        board: [[Option<Symbol>; WORD_LEN]; ROWS],
        evaluations: [Option<Evaluation>; ROWS],
        guessed: GuessedMap,
        row: usize,
        outcome: Outcome,
    ) -> Self {
        Self {
            answer,
            board,
            evaluations,
            guessed,
            hard_mode,
            cursor: Cursor {
                row: row.min(ROWS),
                entry: 0,
            },
            outcome,
        }
    }

    /// The hidden answer
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Entry {
        &self.answer
    }

    /// The symbol at a board cell, if any
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, position: usize) -> Option<&Symbol> {
        self.board[row][position].as_ref()
    }

    /// Per-row evaluations; `None` for rows not yet submitted
    #[inline]
    #[must_use]
    pub const fn evaluations(&self) -> &[Option<Evaluation>; ROWS] {
        &self.evaluations
    }

    /// Best tag ever observed per symbol
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &GuessedMap {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[inline]
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        matches!(self.outcome, Outcome::InProgress)
    }

    /// Toggle the stricter replay constraint
    ///
    /// No-op once the game has ended.
    pub fn set_hard_mode(&mut self, hard_mode: bool) {
        if self.in_progress() {
            self.hard_mode = hard_mode;
        }
    }

    /// Type one symbol into the current row
    ///
    /// No-op if the game has ended or the row is already full.
    pub fn select_symbol(&mut self, symbol: Symbol) {
        if !self.in_progress() || self.cursor.entry >= WORD_LEN {
            return;
        }
        self.board[self.cursor.row][self.cursor.entry] = Some(symbol);
        self.cursor.entry += 1;
    }

    /// Delete the most recently typed symbol of the current row
    ///
    /// No-op if the game has ended or the row is empty.
    pub fn delete_symbol(&mut self) {
        if !self.in_progress() || self.cursor.entry == 0 {
            return;
        }
        self.cursor.entry -= 1;
        self.board[self.cursor.row][self.cursor.entry] = None;
    }

    /// Submit the current row
    ///
    /// On success the row is evaluated and consumed: the evaluation is
    /// recorded, the guessed map merged, the cursor advanced, and the
    /// outcome updated (all-correct wins; a sixth consumed row without a
    /// win loses). On any error the row stays editable and nothing changes.
    ///
    /// # Errors
    /// `IncompleteRow` if fewer than six symbols are entered, `HardMode` if
    /// the replay constraint is violated, `NotAWord` if the row matches no
    /// dictionary entry, `GameOver` if the game has already ended.
    pub fn submit_row(&mut self, dictionary: &Dictionary) -> Result<SubmitSuccess, SubmitError> {
        if !self.in_progress() {
            return Err(SubmitError::GameOver);
        }
        if self.cursor.entry != WORD_LEN {
            debug!(entry = self.cursor.entry, "submit rejected: incomplete row");
            return Err(SubmitError::IncompleteRow);
        }

        let row = self.cursor.row;
        let guess = self.row_symbols(row);

        if self.hard_mode
            && row != 0
            && let Some(previous_eval) = self.evaluations[row - 1]
        {
            let previous = self.row_symbols(row - 1);
            if let Err(violation) = validate(&guess, &previous, &previous_eval) {
                debug!(%violation, "submit rejected: hard mode");
                return Err(SubmitError::HardMode(violation));
            }
        }

        let Some(word) = dictionary.resolve(&guess) else {
            debug!("submit rejected: not a word");
            return Err(SubmitError::NotAWord);
        };
        let word = word.clone();

        let (evaluation, guessed) = evaluate(&guess, self.answer.symbols(), &self.guessed);
        self.evaluations[row] = Some(evaluation);
        self.guessed = guessed;
        self.cursor = Cursor {
            row: row + 1,
            entry: 0,
        };

        if all_correct(&evaluation) {
            self.outcome = Outcome::Won(row);
            info!(row, "game won");
        } else if self.cursor.row == ROWS {
            self.outcome = Outcome::Lost;
            info!(answer = %self.answer, "game lost");
        }
        debug!(row, gloss = word.gloss(), "row submitted");

        Ok(SubmitSuccess {
            word,
            evaluation,
            outcome: self.outcome,
        })
    }

    /// The symbols of a full row
    ///
    /// # Panics
    /// Panics if the row has empty cells; callers only pass rows that are
    /// fully entered or already submitted.
    fn row_symbols(&self, row: usize) -> [Symbol; WORD_LEN] {
        std::array::from_fn(|i| {
            self.board[row][i]
                .clone()
                .expect("row is fully entered")
        })
    }
}
