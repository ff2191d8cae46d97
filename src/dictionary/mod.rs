//! Word lookup and answer selection
//!
//! The dictionary is a read-only bucketed table built once at startup.
//! Buckets are keyed by the two initial symbols (positions 0 and 3), so a
//! lookup is a cheap alphabet pre-filter followed by a short linear scan.

mod embedded;
pub mod daily;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, WORDS, WORDS_COUNT};

use crate::core::{Entry, Symbol, WORD_LEN};
use rustc_hash::FxHashMap;

/// Read-only lookup table over the recognized words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: FxHashMap<(Symbol, Symbol), Vec<Entry>>,
    len: usize,
}

impl Dictionary {
    /// Build the bucket table from a flat entry list
    ///
    /// Entry order is preserved within a bucket; if the list ever carried
    /// duplicate six-symbol keys, `resolve` returns the first.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let len = entries.len();
        let mut buckets: FxHashMap<(Symbol, Symbol), Vec<Entry>> = FxHashMap::default();
        for entry in entries {
            let key = (entry.symbol_at(0).clone(), entry.symbol_at(3).clone());
            buckets.entry(key).or_default().push(entry);
        }
        Self { buckets, len }
    }

    /// Resolve a raw six-symbol guess into a recognized entry
    ///
    /// Returns `None` unless positions 0 and 3 are initials (the cheap
    /// pre-filter), a bucket exists for that pair, and some bucket entry
    /// matches positions 1..=5 pairwise (position 0 is implied by the
    /// bucket choice).
    #[must_use]
    pub fn resolve(&self, candidate: &[Symbol; WORD_LEN]) -> Option<&Entry> {
        if !candidate[0].is_initial() || !candidate[3].is_initial() {
            return None;
        }
        let bucket = self
            .buckets
            .get(&(candidate[0].clone(), candidate[3].clone()))?;
        bucket
            .iter()
            .find(|entry| (1..WORD_LEN).all(|i| entry.symbol_at(i) == &candidate[i]))
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::entries_from_slice;

    fn entry(fields: [&str; 7]) -> Entry {
        Entry::from_fields(&fields).unwrap()
    }

    fn candidate(tokens: [&str; WORD_LEN]) -> [Symbol; WORD_LEN] {
        tokens.map(|t| Symbol::new(t).unwrap())
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(vec![
            entry(["s", "ik", "6", "f", "aan", "6", "食飯"]),
            entry(["s", "ing", "1", "k", "ei", "4", "星期"]),
            entry(["n", "ei", "5", "h", "ou", "2", "你好"]),
            entry(["-", "uk", "1", "k", "ei", "2", "屋企"]),
        ])
    }

    #[test]
    fn resolve_finds_exact_entry() {
        let dict = dictionary();
        let found = dict.resolve(&candidate(["s", "ik", "6", "f", "aan", "6"])).unwrap();
        assert_eq!(found.gloss(), "食飯");
    }

    #[test]
    fn resolve_honors_the_no_initial_marker() {
        let dict = dictionary();
        let found = dict.resolve(&candidate(["-", "uk", "1", "k", "ei", "2"])).unwrap();
        assert_eq!(found.gloss(), "屋企");
    }

    #[test]
    fn resolve_rejects_non_initial_prefilter() {
        let dict = dictionary();
        // Position 0 is a final, position 3 is a tone: both fail the
        // alphabet check before any bucket is consulted
        assert!(dict.resolve(&candidate(["ik", "ik", "6", "f", "aan", "6"])).is_none());
        assert!(dict.resolve(&candidate(["s", "ik", "6", "6", "aan", "6"])).is_none());
    }

    #[test]
    fn resolve_misses_absent_bucket() {
        let dict = dictionary();
        // "gw"/"kw" are valid initials but no entry lives there
        assert!(dict.resolve(&candidate(["gw", "ik", "6", "kw", "aan", "6"])).is_none());
    }

    #[test]
    fn resolve_misses_within_bucket() {
        let dict = dictionary();
        // Same bucket as 食飯 but a different tone
        assert!(dict.resolve(&candidate(["s", "ik", "6", "f", "aan", "1"])).is_none());
    }

    #[test]
    fn resolve_returns_first_on_duplicate_keys() {
        // Duplicate six-symbol keys cannot happen in the shipped lists,
        // but first-match order is the defined tie-break
        let dict = Dictionary::new(vec![
            entry(["s", "ik", "6", "f", "aan", "6", "甲"]),
            entry(["s", "ik", "6", "f", "aan", "6", "乙"]),
        ]);
        let found = dict.resolve(&candidate(["s", "ik", "6", "f", "aan", "6"])).unwrap();
        assert_eq!(found.gloss(), "甲");
    }

    #[test]
    fn embedded_lists_parse_and_answers_are_recognized() {
        let words = entries_from_slice(WORDS);
        let answers = entries_from_slice(ANSWERS);
        assert_eq!(words.len(), WORDS_COUNT);
        assert_eq!(answers.len(), ANSWERS_COUNT);

        let dict = Dictionary::new(words);
        for answer in &answers {
            let found = dict.resolve(answer.symbols()).expect("answer must be a word");
            assert_eq!(found.gloss(), answer.gloss());
        }
    }
}
