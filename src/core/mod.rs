//! Core domain types for word ladders
//!
//! Packs, letters, the pure letter-matrix queries and the session state
//! machine. Nothing here touches the terminal.

mod letter;
pub mod matrix;
mod pack;
mod session;

pub use letter::{Letter, LetterError};
pub use matrix::{CellView, MatchKind, Reveal, is_letter_cell, letter_at, match_kind, width};
pub use pack::{Pack, PackError};
pub use session::{GameSession, GuessOutcome, Snapshot};
