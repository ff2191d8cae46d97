//! Dictionary entry representation
//!
//! An Entry is one recognized two-syllable word: six symbols
//! (initial/final/tone twice) plus the written gloss. The gloss doubles
//! as the answer-identity marker for persisted games.

use super::symbol::{Symbol, SymbolError};
use super::tag::WORD_LEN;
use std::fmt;

/// A recognized word: six syllable symbols plus its written gloss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    symbols: [Symbol; WORD_LEN],
    gloss: String,
}

/// Error type for invalid dictionary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    WrongFieldCount(usize),
    Symbol(SymbolError),
    NotAnInitial { position: usize },
    EmptyGloss,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount(count) => {
                write!(f, "Entry must have {} fields, got {count}", WORD_LEN + 1)
            }
            Self::Symbol(err) => write!(f, "Invalid symbol: {err}"),
            Self::NotAnInitial { position } => {
                write!(f, "Symbol at position {position} must be a recognized initial")
            }
            Self::EmptyGloss => write!(f, "Entry gloss must not be empty"),
        }
    }
}

impl std::error::Error for EntryError {}

impl From<SymbolError> for EntryError {
    fn from(err: SymbolError) -> Self {
        Self::Symbol(err)
    }
}

impl Entry {
    /// Create an entry from six symbols and a gloss
    ///
    /// # Errors
    /// Returns `EntryError` if the gloss is empty or the symbols at
    /// positions 0 and 3 are not members of the initial alphabet.
    pub fn new(symbols: [Symbol; WORD_LEN], gloss: impl Into<String>) -> Result<Self, EntryError> {
        let gloss: String = gloss.into();
        if gloss.is_empty() {
            return Err(EntryError::EmptyGloss);
        }
        for position in [0, 3] {
            if !symbols[position].is_initial() {
                return Err(EntryError::NotAnInitial { position });
            }
        }
        Ok(Self { symbols, gloss })
    }

    /// Create an entry from the 7-field line format (six symbols + gloss)
    ///
    /// # Errors
    /// Returns `EntryError` on a wrong field count, an invalid symbol
    /// token, a non-initial at position 0 or 3, or an empty gloss.
    ///
    /// # Examples
    /// ```
    /// use jyutle::core::Entry;
    ///
    /// let entry = Entry::from_fields(&["b", "aa", "1", "b", "aa", "1", "爸爸"]).unwrap();
    /// assert_eq!(entry.gloss(), "爸爸");
    /// assert_eq!(entry.symbol_at(1).as_str(), "aa");
    /// ```
    pub fn from_fields(fields: &[&str]) -> Result<Self, EntryError> {
        if fields.len() != WORD_LEN + 1 {
            return Err(EntryError::WrongFieldCount(fields.len()));
        }

        let mut symbols = Vec::with_capacity(WORD_LEN);
        for token in &fields[..WORD_LEN] {
            symbols.push(Symbol::new(*token)?);
        }
        let symbols: [Symbol; WORD_LEN] = symbols
            .try_into()
            .expect("length already validated");

        Self::new(symbols, fields[WORD_LEN])
    }

    /// The six syllable symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; WORD_LEN] {
        &self.symbols
    }

    /// The symbol at a specific position (0-5)
    ///
    /// # Panics
    /// Panics if position >= 6
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> &Symbol {
        &self.symbols[position]
    }

    /// The written gloss; also the answer-identity marker
    #[inline]
    #[must_use]
    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    /// Romanized form, e.g. `baa1 baa1` or `uk1 kei2`
    ///
    /// The no-initial marker is omitted from the romanization.
    #[must_use]
    pub fn jyutping(&self) -> String {
        let syllable = |chunk: &[Symbol]| -> String {
            chunk
                .iter()
                .filter(|sym| sym.as_str() != "-")
                .map(Symbol::as_str)
                .collect()
        };
        format!(
            "{} {}",
            syllable(&self.symbols[..3]),
            syllable(&self.symbols[3..])
        )
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.jyutping(), self.gloss)
    }
}
