//! Pack preview command
//!
//! Prints a pack's grid with its link highlights, either as a fresh board or
//! fully uncovered.

use crate::core::Pack;
use crate::output::print_grid;
use crate::packs::PuzzleSet;
use colored::Colorize;

/// Look up a pack by its 1-based number
///
/// # Errors
///
/// Returns an error if `number` is 0 or past the last pack.
pub fn find_pack(puzzles: &PuzzleSet, number: usize) -> Result<&Pack, String> {
    number
        .checked_sub(1)
        .and_then(|index| puzzles.get(index))
        .ok_or_else(|| format!("No pack {number}: choose 1 to {}", puzzles.len()))
}

/// Print a pack, uncovering every row when `reveal` is set
///
/// # Errors
///
/// Returns an error if the pack number is invalid.
pub fn show_pack(puzzles: &PuzzleSet, number: usize, reveal: bool) -> Result<(), String> {
    let pack = find_pack(puzzles, number)?;

    println!("\n{}", "─".repeat(60).cyan());
    println!("Pack {number}: {}", pack.name().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    // A current row past the end shows every letter
    let current_row = if reveal { pack.row_count() } else { 0 };
    print_grid(pack, current_row, &[]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_pack_is_one_based() {
        let puzzles = PuzzleSet::embedded();
        assert_eq!(find_pack(&puzzles, 1).unwrap().name(), puzzles.first().name());
        assert!(find_pack(&puzzles, 0).is_err());
        assert!(find_pack(&puzzles, puzzles.len() + 1).is_err());
    }

    #[test]
    fn show_invalid_pack_errors() {
        let puzzles = PuzzleSet::embedded();
        assert!(show_pack(&puzzles, 99, true).is_err());
        assert!(show_pack(&puzzles, 1, true).is_ok());
    }
}
