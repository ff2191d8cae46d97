//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::core::Symbol;
use crate::dictionary::Dictionary;
use crate::engine::Outcome;
use crate::output::{print_board, print_guessed, print_statistics};
use crate::store::{KeyValueStore, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore>(
    session: &mut Session<S>,
    dictionary: &Dictionary,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 粵拼 Wordle - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the two-syllable word: each row is");
    println!("  initial final tone initial final tone");
    println!("e.g. 食飯 is entered as: s ik 6 f aan 6");
    println!("Use '-' for a syllable with no initial.\n");
    println!("Commands: 'quit' to exit, 'guessed' for known symbols, 'stats' for statistics,");
    println!("'hard on'/'hard off' to toggle hard mode\n");

    if session.game().hard_mode() {
        println!("{}\n", "Hard mode is ON".yellow().bold());
    }

    if !session.game().in_progress() {
        println!("Today's game is already finished.");
        finish(session);
        return Ok(());
    }

    loop {
        print_board(session.game());
        print_guessed(session.game().guessed());

        let row = session.game().cursor().row + 1;
        let input = get_user_input(&format!("Row {row}/6"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 聽日見!\n");
                return Ok(());
            }
            "guessed" | "g" => {
                print_guessed(session.game().guessed());
                continue;
            }
            "stats" => {
                print_statistics(&session.statistics());
                continue;
            }
            "hard on" => {
                session.set_hard_mode(true);
                println!("{}", "Hard mode ON".yellow());
                continue;
            }
            "hard off" => {
                session.set_hard_mode(false);
                println!("Hard mode OFF");
                continue;
            }
            _ => {}
        }

        // Re-enter the row from scratch each prompt
        while session.game().cursor().entry > 0 {
            session.delete_symbol();
        }

        let mut valid = true;
        for token in input.split_whitespace() {
            match Symbol::new(token) {
                Ok(symbol) => session.select_symbol(symbol),
                Err(err) => {
                    println!("{}", format!("❌ {token:?}: {err}").red());
                    valid = false;
                    break;
                }
            }
        }
        if !valid {
            continue;
        }

        match session.submit(dictionary) {
            Ok(success) => {
                println!(
                    "{}",
                    format!("✓ {} ({})", success.word.jyutping(), success.word.gloss()).green()
                );
                if success.outcome.is_terminal() {
                    print_board(session.game());
                    finish(session);
                    return Ok(());
                }
            }
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
            }
        }
    }
}

/// Print the terminal-state banner and lifetime statistics
fn finish<S: KeyValueStore>(session: &Session<S>) {
    match session.game().outcome() {
        Outcome::Won(row) => {
            let performance = match row {
                0 => "🏆 一次過!",
                1 => "⭐ 勁!",
                2 => "💫 好嘢!",
                3 => "✨ 唔錯!",
                4 => "👍 過關!",
                _ => "😅 好險!",
            };
            println!(
                "{}",
                format!("{performance} Solved in {} {}", row + 1, if row == 0 { "guess" } else { "guesses" })
                    .green()
                    .bold()
            );
        }
        Outcome::Lost => {
            println!(
                "{}",
                format!("答案係: {}", session.game().answer()).red().bold()
            );
        }
        Outcome::InProgress => {}
    }
    print_statistics(&session.statistics());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
