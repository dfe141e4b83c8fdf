//! Word Ladder
//!
//! A word ladder puzzle: overlapping words stacked so that each word shares a
//! letter with the next one in the same column. The player uncovers the
//! ladder by guessing letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{GameSession, GuessOutcome, Letter, Pack};
//!
//! let pack = Pack::new("demo", ["CYCLING", " INSIDE"]).unwrap();
//! let mut session = GameSession::new(pack);
//!
//! // 'I' is shared by both words in column 4
//! let outcome = session.guess_letter(Letter::new('i').unwrap());
//! assert_eq!(outcome, GuessOutcome::Advanced);
//! assert_eq!(session.current_row(), 1);
//! ```

// Core domain types
pub mod core;

// Puzzle packs
pub mod packs;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
