//! Simple interactive CLI mode
//!
//! Text-based word ladder without the TUI

use crate::core::{GameSession, GuessOutcome, Letter};
use crate::output::formatters::describe_outcome;
use crate::output::{print_grid, print_keyboard, print_pack_list, print_status};
use crate::packs::PuzzleSet;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    List,
    /// 0-based pack index
    SelectPack(usize),
    NextPack,
    Guess(Vec<Letter>),
    Invalid(String),
}

impl Command {
    /// Parse one input line
    ///
    /// A bare number picks a pack (1-based); any other word is a run of
    /// letters guessed in order.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "quit" | "exit" | ":q" => return Self::Quit,
            "help" | "?" => return Self::Help,
            "list" | "packs" => return Self::List,
            "next" | "tab" => return Self::NextPack,
            _ => {}
        }

        if let Ok(number) = input.parse::<usize>() {
            return match number.checked_sub(1) {
                Some(index) => Self::SelectPack(index),
                None => Self::Invalid("Packs are numbered from 1".to_string()),
            };
        }

        match input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Letter::new)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(letters) if !letters.is_empty() => Self::Guess(letters),
            Ok(_) => Self::Invalid("Type a letter to guess".to_string()),
            Err(e) => Self::Invalid(e.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(puzzles: &PuzzleSet) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Ladder - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let mut pack_index = 0;
    let mut session = GameSession::new(puzzles.first().clone());
    let mut revealed_announced = false;

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Pack {}: {}",
            pack_index + 1,
            session.pack().name().bright_yellow().bold()
        );
        let snapshot = session.snapshot();
        print_grid(snapshot.pack, snapshot.current_row, snapshot.used_letters);
        print_keyboard(snapshot.used_letters);
        print_status(&snapshot);
        println!();

        match Command::parse(&get_user_input("Guess")?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::List => print_pack_list(puzzles),
            Command::NextPack => {
                pack_index = (pack_index + 1) % puzzles.len();
                select(&mut session, puzzles, pack_index);
                revealed_announced = false;
            }
            Command::SelectPack(index) => {
                if index < puzzles.len() {
                    pack_index = index;
                    select(&mut session, puzzles, pack_index);
                    revealed_announced = false;
                } else {
                    println!("❌ There are only {} packs\n", puzzles.len());
                }
            }
            Command::Guess(letters) => {
                for letter in letters {
                    if session.is_letter_used(letter) {
                        println!(
                            "  {} '{letter}' was already used on this row",
                            "·".bright_black()
                        );
                        continue;
                    }

                    let outcome = session.guess_letter(letter);
                    let text = describe_outcome(outcome, letter, session.current_row());
                    match outcome {
                        GuessOutcome::Advanced | GuessOutcome::Scored => {
                            println!("  ✅ {}", text.green());
                        }
                        GuessOutcome::Missed => println!("  ❌ {}", text.red()),
                        GuessOutcome::Accepted => println!("  ➖ {text}"),
                    }
                }

                if session.is_board_revealed() && !revealed_announced {
                    revealed_announced = true;
                    println!(
                        "\n{}",
                        "    🎉 The whole ladder is uncovered! 🎉    ".bright_green().bold()
                    );
                    println!("  Keep guessing for points, or pick another pack.\n");
                }
            }
            Command::Invalid(reason) => println!("❌ {reason}\n"),
        }
    }
}

fn select(session: &mut GameSession, puzzles: &PuzzleSet, index: usize) {
    if let Some(pack) = puzzles.get(index) {
        session.select_pack(pack.clone());
        println!("\n🔄 Switched to {}\n", pack.name().bright_yellow());
    }
}

fn print_help() {
    println!("Uncover each word of the ladder by guessing its letters.");
    println!("A letter that the next word shares in the same column moves you down.\n");
    println!("  - Type one or more letters to guess them in order");
    println!("  - Type a number to switch pack, 'next' for the next pack");
    println!("  - 'list' shows the packs, 'quit' exits\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::new(c).unwrap()).collect()
    }

    #[test]
    fn parse_quit_variants() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("  EXIT "), Command::Quit);
    }

    #[test]
    fn parse_pack_numbers() {
        assert_eq!(Command::parse("1"), Command::SelectPack(0));
        assert_eq!(Command::parse("3"), Command::SelectPack(2));
        assert!(matches!(Command::parse("0"), Command::Invalid(_)));
        assert_eq!(Command::parse("next"), Command::NextPack);
    }

    #[test]
    fn parse_letters() {
        assert_eq!(Command::parse("e"), Command::Guess(letters("E")));
        assert_eq!(Command::parse("c i"), Command::Guess(letters("CI")));
    }

    #[test]
    fn parse_rejects_symbols() {
        assert!(matches!(Command::parse("a1"), Command::Invalid(_)));
        assert!(matches!(Command::parse(""), Command::Invalid(_)));
    }
}
