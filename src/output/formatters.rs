//! Formatting utilities for terminal output

use crate::core::{Evaluation, Tag};

/// Cell width used when laying out board rows
pub const CELL_WIDTH: usize = 4;

/// Format a tag as its emoji square
#[must_use]
pub const fn tag_emoji(tag: Tag) -> char {
    match tag {
        Tag::Correct => '🟩',
        Tag::Present => '🟨',
        Tag::Absent => '⬜',
    }
}

/// Format a row evaluation as an emoji string
#[must_use]
pub fn evaluation_emoji(evaluation: &Evaluation) -> String {
    evaluation.iter().map(|tag| tag_emoji(*tag)).collect()
}

/// Pad a symbol token to the board cell width
#[must_use]
pub fn pad_symbol(token: &str, width: usize) -> String {
    format!("{token:<width$}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_emoji_maps_all_tags() {
        let evaluation = [
            Tag::Correct,
            Tag::Present,
            Tag::Absent,
            Tag::Absent,
            Tag::Present,
            Tag::Correct,
        ];
        assert_eq!(evaluation_emoji(&evaluation), "🟩🟨⬜⬜🟨🟩");
    }

    #[test]
    fn pad_symbol_left_aligns() {
        assert_eq!(pad_symbol("b", 4), "b   ");
        assert_eq!(pad_symbol("aang", 4), "aang");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
