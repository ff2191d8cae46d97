//! Game session with durable persistence
//!
//! A `Session` owns one game and one store. On construction it resumes a
//! persisted snapshot if it belongs to the same answer as today's game,
//! otherwise it starts fresh. Every state-affecting operation writes a
//! fresh snapshot; lifetime statistics are folded in exactly once, at the
//! moment a live submission ends the game.

use super::{GAME_STATE_KEY, KeyValueStore, STATISTICS_KEY};
use crate::core::{Entry, Evaluation, GuessedMap, Symbol, Tag, WORD_LEN};
use crate::dictionary::{Dictionary, daily::daily_answer};
use crate::engine::{Game, Outcome, ROWS, Statistics, SubmitError, SubmitSuccess};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Persisted snapshot of one game, in the original wire shape
///
/// Board cells are symbol strings with `""` for empty; evaluations are
/// lowercase tag names; `gameStatus` is `IN_PROGRESS`/`WON`/`LOST`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    game_board: Vec<Vec<String>>,
    evaluations: Vec<Option<Vec<String>>>,
    hard_mode: bool,
    guessed: BTreeMap<String, String>,
    row_index: usize,
    game_date: String,
    game_status: String,
}

impl GameRecord {
    /// Snapshot a game as an owned value
    ///
    /// The record shares no storage with the engine; callers may cache it
    /// freely.
    #[must_use]
    pub fn from_game(game: &Game, date: &str) -> Self {
        let game_board = (0..ROWS)
            .map(|row| {
                (0..WORD_LEN)
                    .map(|position| {
                        game.cell(row, position)
                            .map_or_else(String::new, |sym| sym.as_str().to_string())
                    })
                    .collect()
            })
            .collect();
        let evaluations = game
            .evaluations()
            .iter()
            .map(|row| row.map(|tags| tags.iter().map(|tag| tag.as_str().to_string()).collect()))
            .collect();
        let guessed = game
            .guessed()
            .iter()
            .map(|(symbol, tag)| (symbol.as_str().to_string(), tag.as_str().to_string()))
            .collect();

        Self {
            game_board,
            evaluations,
            hard_mode: game.hard_mode(),
            guessed,
            row_index: game.cursor().row,
            game_date: date.to_string(),
            game_status: match game.outcome() {
                Outcome::InProgress => "IN_PROGRESS",
                Outcome::Won(_) => "WON",
                Outcome::Lost => "LOST",
            }
            .to_string(),
        }
    }

    /// The date this snapshot was taken for
    #[must_use]
    pub fn game_date(&self) -> &str {
        &self.game_date
    }

    /// Rebuild a game for the given answer
    ///
    /// Returns `None` for any shape violation: wrong grid dimensions, an
    /// unparsable symbol or tag, a row index out of range, an unknown
    /// status, an evaluation missing for a submitted row, or a status
    /// inconsistent with the row index. Rows at or past the row index are
    /// restored empty; partial input is not resumed.
    #[must_use]
    pub fn into_game(self, answer: Entry) -> Option<Game> {
        if self.row_index > ROWS
            || self.game_board.len() != ROWS
            || self.evaluations.len() != ROWS
        {
            return None;
        }

        let mut board: [[Option<Symbol>; WORD_LEN]; ROWS] = Default::default();
        for (row, cells) in self.game_board.iter().enumerate() {
            if cells.len() != WORD_LEN {
                return None;
            }
            if row >= self.row_index {
                continue;
            }
            for (position, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    // Submitted rows must be fully populated
                    return None;
                }
                board[row][position] = Some(Symbol::new(cell).ok()?);
            }
        }

        let mut evaluations: [Option<Evaluation>; ROWS] = [None; ROWS];
        for (row, tags) in self.evaluations.iter().enumerate() {
            match tags {
                Some(tags) if row < self.row_index => {
                    if tags.len() != WORD_LEN {
                        return None;
                    }
                    let mut evaluation = [Tag::Absent; WORD_LEN];
                    for (position, tag) in tags.iter().enumerate() {
                        evaluation[position] = Tag::parse(tag)?;
                    }
                    evaluations[row] = Some(evaluation);
                }
                None if row >= self.row_index => {}
                _ => return None,
            }
        }

        let outcome = match self.game_status.as_str() {
            "IN_PROGRESS" if self.row_index < ROWS => Outcome::InProgress,
            "WON" if self.row_index > 0 => Outcome::Won(self.row_index - 1),
            "LOST" => Outcome::Lost,
            _ => return None,
        };

        let mut guessed = GuessedMap::new();
        for (symbol, tag) in &self.guessed {
            guessed.observe(Symbol::new(symbol.as_str()).ok()?, Tag::parse(tag)?);
        }

        Some(Game::resume(
            answer,
            self.hard_mode,
            board,
            evaluations,
            guessed,
            self.row_index,
            outcome,
        ))
    }
}

/// One game bound to a store
pub struct Session<S: KeyValueStore> {
    game: Game,
    store: S,
    date: String,
}

impl<S: KeyValueStore> Session<S> {
    /// Resume the persisted game for this answer, or start fresh
    ///
    /// A snapshot is resumed only if it parses and its stored date maps to
    /// the same answer (by gloss) as the one passed in; anything else is
    /// discarded. A resumed snapshot carries its own hard-mode flag, which
    /// overrides `hard_mode`.
    pub fn resume_or_start(
        store: S,
        answers: &[Entry],
        answer: Entry,
        date: impl Into<String>,
        hard_mode: bool,
    ) -> Self {
        let date = date.into();
        let game = match Self::try_resume(&store, answers, &answer) {
            Some(game) => {
                info!(%date, "resuming persisted game");
                game
            }
            None => {
                info!(%date, "starting fresh game");
                Game::new(answer, hard_mode)
            }
        };

        let mut session = Self { game, store, date };
        session.persist();
        session
    }

    fn try_resume(store: &S, answers: &[Entry], answer: &Entry) -> Option<Game> {
        let raw = store.get(GAME_STATE_KEY)?;
        let record: GameRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, "discarding malformed game snapshot");
                return None;
            }
        };

        // The snapshot belongs to today's game only if its stored date
        // maps to the same answer
        let stored = daily_answer(answers, record.game_date())?;
        if stored.gloss() != answer.gloss() {
            debug!(stored_date = record.game_date(), "discarding stale snapshot");
            return None;
        }

        record.into_game(answer.clone())
    }

    /// The underlying game, read-only
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The date this session plays
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Lifetime statistics from the store
    ///
    /// A missing or malformed record reads as zeroes.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        super::load_statistics(&self.store)
    }

    /// Type one symbol into the current row
    pub fn select_symbol(&mut self, symbol: Symbol) {
        self.game.select_symbol(symbol);
        self.persist();
    }

    /// Delete the most recently typed symbol
    pub fn delete_symbol(&mut self) {
        self.game.delete_symbol();
        self.persist();
    }

    /// Toggle hard mode
    pub fn set_hard_mode(&mut self, hard_mode: bool) {
        self.game.set_hard_mode(hard_mode);
        self.persist();
    }

    /// Submit the current row
    ///
    /// A submission that ends the game folds the outcome into the
    /// persisted statistics, exactly once; resumed terminal games never
    /// re-record.
    ///
    /// # Errors
    /// Propagates the engine's `SubmitError`; nothing is persisted on
    /// rejection because nothing changed.
    pub fn submit(&mut self, dictionary: &Dictionary) -> Result<SubmitSuccess, SubmitError> {
        let success = self.game.submit_row(dictionary)?;

        if success.outcome.is_terminal() {
            let stats = self.statistics().record(success.outcome);
            self.write(STATISTICS_KEY, &stats);
        }
        self.persist();

        Ok(success)
    }

    fn persist(&mut self) {
        let record = GameRecord::from_game(&self.game, &self.date);
        self.write(GAME_STATE_KEY, &record);
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, &json),
            Err(err) => warn!(key, %err, "failed to serialize record"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::entries_from_slice;
    use crate::store::MemoryStore;

    fn entry(fields: [&str; 7]) -> Entry {
        Entry::from_fields(&fields).unwrap()
    }

    fn answers() -> Vec<Entry> {
        entries_from_slice(crate::dictionary::ANSWERS)
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(entries_from_slice(crate::dictionary::WORDS))
    }

    fn type_row(session: &mut Session<MemoryStore>, tokens: [&str; WORD_LEN]) {
        for token in tokens {
            session.select_symbol(Symbol::new(token).unwrap());
        }
    }

    /// The daily answer for a fixed date, so tests type against it
    fn fixture() -> (Vec<Entry>, Dictionary, Entry, &'static str) {
        let pool = answers();
        let date = "2024-03-01";
        let answer = daily_answer(&pool, date).unwrap().clone();
        (pool, dictionary(), answer, date)
    }

    fn guess_of(entry: &Entry) -> [&str; WORD_LEN] {
        std::array::from_fn(|i| entry.symbol_at(i).as_str())
    }

    #[test]
    fn fresh_session_persists_an_empty_snapshot() {
        let (pool, _, answer, date) = fixture();
        let session = Session::resume_or_start(MemoryStore::new(), &pool, answer, date, false);

        let raw = session.store.get(GAME_STATE_KEY).unwrap();
        let record: GameRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.row_index, 0);
        assert_eq!(record.game_status, "IN_PROGRESS");
        assert_eq!(record.game_date, date);
        assert_eq!(record.game_board.len(), ROWS);
    }

    #[test]
    fn snapshot_round_trips_into_the_same_game() {
        let (pool, dict, answer, date) = fixture();
        let mut session =
            Session::resume_or_start(MemoryStore::new(), &pool, answer.clone(), date, true);
        // Submit one known word
        let other = entry(["n", "ei", "5", "h", "ou", "2", "你好"]);
        let tokens = if other.gloss() == answer.gloss() {
            ["s", "ik", "6", "f", "aan", "6"]
        } else {
            guess_of(&other)
        };
        type_row(&mut session, tokens);
        session.submit(&dict).unwrap();

        let store = session.store.clone();
        let resumed = Session::resume_or_start(store, &pool, answer, date, false);
        assert_eq!(resumed.game().cursor().row, 1);
        assert!(resumed.game().evaluations()[0].is_some());
        // Snapshot's hard-mode flag wins over the argument
        assert!(resumed.game().hard_mode());
    }

    #[test]
    fn stale_date_snapshot_is_discarded() {
        let pool = answers();
        let dict = dictionary();
        // Two dates with different answers
        let (date_a, date_b) = {
            let mut found = ("2024-03-01", "2024-03-02");
            for day in 2..=28 {
                let candidate = format!("2024-03-{day:02}");
                if daily_answer(&pool, &candidate).unwrap().gloss()
                    != daily_answer(&pool, "2024-03-01").unwrap().gloss()
                {
                    found = ("2024-03-01", Box::leak(candidate.into_boxed_str()));
                    break;
                }
            }
            found
        };

        let answer_a = daily_answer(&pool, date_a).unwrap().clone();
        let mut session =
            Session::resume_or_start(MemoryStore::new(), &pool, answer_a, date_a, false);
        type_row(&mut session, guess_of(&entry(["n", "ei", "5", "h", "ou", "2", "你好"])));
        let _ = session.submit(&dict);
        let store = session.store.clone();

        // Next day: the old snapshot must not resume
        let answer_b = daily_answer(&pool, date_b).unwrap().clone();
        let next = Session::resume_or_start(store, &pool, answer_b, date_b, false);
        assert_eq!(next.game().cursor().row, 0);
    }

    #[test]
    fn malformed_snapshot_starts_fresh() {
        let (pool, _, answer, date) = fixture();
        let mut store = MemoryStore::new();
        store.set(GAME_STATE_KEY, "{\"gameBoard\": 12}");

        let session = Session::resume_or_start(store, &pool, answer, date, false);
        assert_eq!(session.game().cursor().row, 0);
        assert!(session.game().in_progress());
    }

    #[test]
    fn winning_submission_records_statistics_once() {
        let (pool, dict, answer, date) = fixture();
        let mut session =
            Session::resume_or_start(MemoryStore::new(), &pool, answer.clone(), date, false);
        type_row(&mut session, guess_of(&answer));
        let success = session.submit(&dict).unwrap();
        assert_eq!(success.outcome, Outcome::Won(0));

        let stats = session.statistics();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guesses.one, 1);

        // Resuming the finished game must not re-record
        let store = session.store.clone();
        let resumed = Session::resume_or_start(store, &pool, answer, date, false);
        assert_eq!(resumed.statistics().games_played, 1);
        assert_eq!(resumed.game().outcome(), Outcome::Won(0));
    }

    #[test]
    fn rejected_submission_records_nothing() {
        let (pool, dict, answer, date) = fixture();
        let mut session =
            Session::resume_or_start(MemoryStore::new(), &pool, answer, date, false);
        type_row(&mut session, ["n", "ei", "5", "h", "ou", "5"]);

        assert_eq!(session.submit(&dict), Err(SubmitError::NotAWord));
        assert_eq!(session.statistics(), Statistics::default());
    }

    #[test]
    fn record_rejects_inconsistent_shapes() {
        let (_, _, answer, date) = fixture();
        let game = Game::new(answer.clone(), false);
        let record = GameRecord::from_game(&game, date);

        // Row index past the board
        let mut bad = record.clone();
        bad.row_index = 7;
        assert!(bad.into_game(answer.clone()).is_none());

        // Unknown status
        let mut bad = record.clone();
        bad.game_status = "PAUSED".to_string();
        assert!(bad.into_game(answer.clone()).is_none());

        // Won with no submitted row
        let mut bad = record.clone();
        bad.game_status = "WON".to_string();
        assert!(bad.into_game(answer.clone()).is_none());

        // Submitted row without an evaluation
        let mut bad = record;
        bad.row_index = 1;
        assert!(bad.into_game(answer).is_none());
    }

    #[test]
    fn resumed_lost_game_reports_lost() {
        let (pool, _, answer, date) = fixture();
        let mut game = Game::new(answer.clone(), false);
        let record = {
            // Fabricate a finished-lost record by marking all six rows
            // submitted with absent evaluations
            let mut record = GameRecord::from_game(&game, date);
            record.row_index = ROWS;
            record.game_status = "LOST".to_string();
            for row in 0..ROWS {
                record.game_board[row] =
                    ["n", "ei", "5", "h", "ou", "2"].iter().map(ToString::to_string).collect();
                record.evaluations[row] = Some(vec!["absent".to_string(); WORD_LEN]);
            }
            record
        };
        game = record.into_game(answer).unwrap();
        assert_eq!(game.outcome(), Outcome::Lost);
        assert!(!game.in_progress());
    }
}
