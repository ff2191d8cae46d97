//! Guess evaluation with exact duplicate-symbol semantics
//!
//! Each position is tagged `Correct`, `Present`, or `Absent`. Repeated
//! symbols follow multiset rules: a symbol only earns `Present` while the
//! answer still has unaccounted copies, where exact matches anywhere and
//! `Present` tags already assigned at earlier positions of this same guess
//! both count as accounted. Position order within one call is therefore a
//! correctness requirement, not an optimization.

use crate::core::{Evaluation, GuessedMap, Symbol, Tag, WORD_LEN};

/// Evaluate a guess against the answer
///
/// Returns the per-position tags and the guessed map updated with this
/// row's observations. The input map is not modified; the merge keeps the
/// higher-precedence tag per symbol, so `Correct` is sticky.
///
/// # Examples
/// ```
/// use jyutle::core::{GuessedMap, Symbol, Tag};
/// use jyutle::engine::evaluate;
///
/// let to_row = |tokens: [&str; 6]| tokens.map(|t| Symbol::new(t).unwrap());
/// let answer = to_row(["n", "ei", "5", "h", "ou", "2"]);
/// let guess = to_row(["n", "ou", "5", "h", "ei", "2"]);
///
/// let (evaluation, _guessed) = evaluate(&guess, &answer, &GuessedMap::new());
/// assert_eq!(
///     evaluation,
///     [Tag::Correct, Tag::Present, Tag::Correct, Tag::Correct, Tag::Present, Tag::Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(
    guess: &[Symbol; WORD_LEN],
    answer: &[Symbol; WORD_LEN],
    guessed: &GuessedMap,
) -> (Evaluation, GuessedMap) {
    let mut evaluation = [Tag::Absent; WORD_LEN];

    for i in 0..WORD_LEN {
        let symbol = &guess[i];

        evaluation[i] = if !answer.contains(symbol) {
            Tag::Absent
        } else if answer[i] == *symbol {
            Tag::Correct
        } else {
            // Copies of this symbol in the answer
            let occurrences = answer.iter().filter(|s| *s == symbol).count();
            // Copies already consumed by an exact match elsewhere in this guess
            let fulfilled = (0..WORD_LEN)
                .filter(|&j| guess[j] == answer[j] && answer[j] == *symbol)
                .count();
            // Copies already flagged Present at earlier positions of this guess
            let flagged = (0..i)
                .filter(|&j| evaluation[j] == Tag::Present && guess[j] == *symbol)
                .count();

            if occurrences > fulfilled + flagged {
                Tag::Present
            } else {
                Tag::Absent
            }
        };
    }

    let mut updated = guessed.clone();
    for (i, tag) in evaluation.iter().enumerate() {
        updated.observe(guess[i].clone(), *tag);
    }

    (evaluation, updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tokens: [&str; WORD_LEN]) -> [Symbol; WORD_LEN] {
        tokens.map(|t| Symbol::new(t).unwrap())
    }

    #[test]
    fn exact_guess_is_all_correct() {
        let answer = row(["s", "ik", "6", "f", "aan", "6"]);
        let (evaluation, guessed) = evaluate(&answer.clone(), &answer, &GuessedMap::new());

        assert_eq!(evaluation, [Tag::Correct; WORD_LEN]);
        for symbol in &answer {
            assert_eq!(guessed.get(symbol), Some(Tag::Correct));
        }
    }

    #[test]
    fn disjoint_guess_is_all_absent() {
        let answer = row(["s", "ik", "6", "f", "aan", "6"]);
        let guess = row(["b", "o", "1", "l", "ou", "4"]);
        let (evaluation, guessed) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(evaluation, [Tag::Absent; WORD_LEN]);
        for symbol in &guess {
            assert_eq!(guessed.get(symbol), Some(Tag::Absent));
        }
    }

    #[test]
    fn transposed_symbols_are_present() {
        let answer = row(["n", "ei", "5", "h", "ou", "2"]);
        let guess = row(["n", "ou", "5", "h", "ei", "2"]);
        let (evaluation, _) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(
            evaluation,
            [
                Tag::Correct,
                Tag::Present,
                Tag::Correct,
                Tag::Correct,
                Tag::Present,
                Tag::Correct
            ]
        );
    }

    #[test]
    fn duplicate_pair_both_present() {
        // Answer holds "a" twice; the guess holds it twice, both misplaced
        let answer = row(["a", "a", "b", "b", "c", "c"]);
        let guess = row(["b", "b", "a", "a", "d", "d"]);
        let (evaluation, _) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(
            evaluation,
            [
                Tag::Present,
                Tag::Present,
                Tag::Present,
                Tag::Present,
                Tag::Absent,
                Tag::Absent
            ]
        );
    }

    #[test]
    fn duplicate_surplus_copy_is_absent() {
        // Answer holds "a" twice; a third misplaced copy earns nothing,
        // and earlier positions take Present priority left-to-right
        let answer = row(["a", "a", "b", "b", "c", "c"]);
        let guess = row(["x", "a", "y", "a", "z", "a"]);
        let (evaluation, _) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(
            evaluation,
            [
                Tag::Absent,
                Tag::Correct,
                Tag::Absent,
                Tag::Present,
                Tag::Absent,
                Tag::Absent
            ]
        );
    }

    #[test]
    fn exact_matches_consume_before_present() {
        // Both answer copies of "a" are matched exactly; the extra
        // misplaced copy must come out Absent
        let answer = row(["a", "a", "b", "b", "c", "c"]);
        let guess = row(["a", "a", "a", "x", "y", "z"]);
        let (evaluation, _) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(
            evaluation,
            [
                Tag::Correct,
                Tag::Correct,
                Tag::Absent,
                Tag::Absent,
                Tag::Absent,
                Tag::Absent
            ]
        );
    }

    #[test]
    fn later_exact_match_consumes_from_earlier_present() {
        // One "a" in the answer, matched exactly at position 3; the
        // misplaced copy at position 0 finds no remaining "a"
        let answer = row(["b", "x", "y", "a", "z", "c"]);
        let guess = row(["a", "x", "y", "a", "w", "v"]);
        let (evaluation, _) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(evaluation[0], Tag::Absent);
        assert_eq!(evaluation[3], Tag::Correct);
    }

    #[test]
    fn guessed_map_merge_is_monotonic() {
        let answer = row(["a", "b", "c", "d", "e", "f"]);

        // First row: "a" correct
        let (_, guessed) = evaluate(&row(["a", "x", "y", "z", "w", "v"]), &answer, &GuessedMap::new());
        assert_eq!(guessed.get(&Symbol::new("a").unwrap()), Some(Tag::Correct));

        // Second row: "a" misplaced; the map must keep Correct
        let (_, guessed) = evaluate(&row(["x", "a", "y", "z", "w", "v"]), &answer, &guessed);
        assert_eq!(guessed.get(&Symbol::new("a").unwrap()), Some(Tag::Correct));
    }

    #[test]
    fn same_row_downgrade_does_not_stick() {
        // "a" is Correct at position 0 and Absent (surplus) at position 5;
        // the map keeps Correct
        let answer = row(["a", "b", "c", "d", "e", "f"]);
        let guess = row(["a", "x", "y", "z", "w", "a"]);
        let (evaluation, guessed) = evaluate(&guess, &answer, &GuessedMap::new());

        assert_eq!(evaluation[0], Tag::Correct);
        assert_eq!(evaluation[5], Tag::Absent);
        assert_eq!(guessed.get(&Symbol::new("a").unwrap()), Some(Tag::Correct));
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let answer = row(["b", "aa", "1", "b", "aa", "1"]);
        let guess = row(["m", "aa", "1", "m", "aa", "1"]);
        let first = evaluate(&guess, &answer, &GuessedMap::new());
        let second = evaluate(&guess, &answer, &GuessedMap::new());
        assert_eq!(first, second);
    }
}
