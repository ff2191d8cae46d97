//! Display functions for game state

use super::formatters::{CELL_WIDTH, create_progress_bar, pad_symbol};
use crate::core::{GuessedMap, Tag, WORD_LEN};
use crate::engine::{Game, ROWS, Statistics};
use colored::Colorize;

/// Print the board, submitted rows colored by their evaluation
pub fn print_board(game: &Game) {
    println!();
    for row in 0..ROWS {
        let mut line = String::new();
        let evaluation = game.evaluations()[row];
        for position in 0..WORD_LEN {
            let cell = game
                .cell(row, position)
                .map_or_else(|| "·".to_string(), |sym| sym.as_str().to_string());
            let padded = pad_symbol(&cell, CELL_WIDTH);
            let painted = match evaluation.map(|tags| tags[position]) {
                Some(Tag::Correct) => padded.black().on_green(),
                Some(Tag::Present) => padded.black().on_yellow(),
                Some(Tag::Absent) => padded.white().on_bright_black(),
                None => padded.normal(),
            };
            line.push_str(&painted.to_string());
            line.push(' ');
        }
        println!("  {line}");
    }
    println!();
}

/// Print the best known status of every guessed symbol
pub fn print_guessed(guessed: &GuessedMap) {
    if guessed.is_empty() {
        return;
    }

    let mut groups: [Vec<&str>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (symbol, tag) in guessed.iter() {
        let group = match tag {
            Tag::Correct => &mut groups[0],
            Tag::Present => &mut groups[1],
            Tag::Absent => &mut groups[2],
        };
        group.push(symbol.as_str());
    }
    for group in &mut groups {
        group.sort_unstable();
    }

    if !groups[0].is_empty() {
        println!("  {} {}", "啱位:".green().bold(), groups[0].join(" "));
    }
    if !groups[1].is_empty() {
        println!("  {} {}", "有但錯位:".yellow().bold(), groups[1].join(" "));
    }
    if !groups[2].is_empty() {
        println!("  {} {}", "冇:".bright_black(), groups[2].join(" "));
    }
}

/// Print lifetime statistics with a guess-distribution bar chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "統計 Statistics".bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Played:         {}", stats.games_played);
    println!("  Win %:          {}", stats.win_percentage);
    println!("  Current streak: {}", stats.current_streak);
    println!("  Max streak:     {}", stats.max_streak);

    let rows = stats.guesses.rows();
    let max = rows.iter().copied().max().unwrap_or(0).max(stats.guesses.fail);
    println!("\n  Guess distribution:");
    for (i, count) in rows.iter().enumerate() {
        println!(
            "  {}    {} {count}",
            i + 1,
            create_progress_bar(f64::from(*count), f64::from(max), 16)
        );
    }
    println!(
        "  fail {} {}",
        create_progress_bar(f64::from(stats.guesses.fail), f64::from(max), 16),
        stats.guesses.fail
    );
    println!("{}", "─".repeat(40).cyan());
}
