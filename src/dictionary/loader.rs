//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Entry;
use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a file
///
/// One entry per line, seven whitespace-separated fields (six symbols plus
/// the gloss). Malformed lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use jyutle::dictionary::loader::load_from_file;
///
/// let entries = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Entry>> {
    let content = fs::read_to_string(path)?;

    let entries = content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                None
            } else {
                Entry::from_fields(&fields).ok()
            }
        })
        .collect();

    Ok(entries)
}

/// Convert an embedded entry slice to owned entries
///
/// # Examples
/// ```
/// use jyutle::dictionary::loader::entries_from_slice;
/// use jyutle::dictionary::WORDS;
///
/// let entries = entries_from_slice(WORDS);
/// assert_eq!(entries.len(), WORDS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[[&str; 7]]) -> Vec<Entry> {
    slice
        .iter()
        .filter_map(|fields| Entry::from_fields(fields).ok())
        .collect()
}
