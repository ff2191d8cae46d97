//! Syllable symbol representation
//!
//! A Symbol is one grid cell: a Jyutping initial, a final, a tone digit,
//! or the `-` marker for a syllable with no initial.

use std::fmt;

/// The recognized syllable initials, including the explicit no-initial marker.
///
/// Positions 0 and 3 of every word must come from this alphabet; it is the
/// cheap pre-filter used before any dictionary bucket scan.
pub const INITIALS: [&str; 20] = [
    "b", "p", "m", "f", "g", "k", "ng", "h", "d", "t", "n", "l", "gw", "kw", "w", "j", "z", "c",
    "s", "-",
];

/// Longest symbol we accept ("aang" and friends).
const MAX_SYMBOL_LEN: usize = 4;

/// A single syllable component occupying one grid cell
///
/// Symbols are lowercase tokens over `[a-z0-9-]`, at most four characters.
/// Equality is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

/// Error type for invalid symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Symbol must not be empty"),
            Self::TooLong(len) => {
                write!(f, "Symbol must be at most {MAX_SYMBOL_LEN} characters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "Symbol contains invalid character {c:?}"),
        }
    }
}

impl std::error::Error for SymbolError {}

impl Symbol {
    /// Create a new Symbol from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `SymbolError` if the token is empty, longer than four
    /// characters, or contains anything outside `[a-z0-9-]`.
    ///
    /// # Examples
    /// ```
    /// use jyutle::core::Symbol;
    ///
    /// let initial = Symbol::new("gw").unwrap();
    /// assert_eq!(initial.as_str(), "gw");
    ///
    /// assert!(Symbol::new("").is_err());
    /// assert!(Symbol::new("aangg").is_err());
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self, SymbolError> {
        let token: String = token.into().to_lowercase();

        if token.is_empty() {
            return Err(SymbolError::Empty);
        }
        if token.len() > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong(token.len()));
        }
        if let Some(c) = token
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SymbolError::InvalidCharacter(c));
        }

        Ok(Self(token))
    }

    /// Get the symbol as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this symbol is a member of the initial alphabet
    #[inline]
    #[must_use]
    pub fn is_initial(&self) -> bool {
        INITIALS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
