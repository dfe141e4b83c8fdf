//! Formatting utilities shared by the TUI and the plain terminal output

use crate::core::{CellView, GuessOutcome, Letter, Reveal};

/// Match highlight colors as RGB, indexed by palette slot
pub const PALETTE: [(u8, u8, u8); 5] = [
    (0x42, 0x87, 0xf5), // Blue
    (0x42, 0xf5, 0x6f), // Green
    (0xf2, 0xf5, 0x42), // Yellow
    (0xeb, 0x40, 0x34), // Red
    (0x9c, 0x34, 0xeb), // Purple
];

/// Background for the row the player is working on
pub const CURRENT_ROW_RGB: (u8, u8, u8) = (0x5f, 0xb4, 0xde);

/// On-screen keyboard as (indent, keys) per line
pub const KEYBOARD: [(usize, &str); 3] = [(0, "QWERTYUIOP"), (1, "ASDFGHJKL"), (3, "ZXCVBNM")];

/// Color for a palette slot
///
/// Slots past the end wrap around, so packs longer than the palette reuse
/// colors instead of losing their highlight.
#[inline]
#[must_use]
pub const fn palette_color(slot: usize) -> (u8, u8, u8) {
    PALETTE[slot % PALETTE.len()]
}

/// Three-column text for one grid cell
#[must_use]
pub fn cell_text(view: &CellView) -> String {
    match view.reveal {
        Reveal::Hidden => "   ".to_string(),
        Reveal::Covered => " · ".to_string(),
        Reveal::Shown(ch) => format!(" {ch} "),
    }
}

/// One-line description of a guess result
///
/// `current_row` is the session's row after the guess (0-based).
#[must_use]
pub fn describe_outcome(outcome: GuessOutcome, letter: Letter, current_row: usize) -> String {
    match outcome {
        GuessOutcome::Advanced => {
            format!("'{letter}' links down! On to row {} (+1 point)", current_row + 1)
        }
        GuessOutcome::Scored => format!("'{letter}' is in the last word (+1 point)"),
        GuessOutcome::Missed => format!("No '{letter}' in this word (failed attempt)"),
        GuessOutcome::Accepted => format!("'{letter}' is in the word but doesn't link down"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchKind;

    fn view(reveal: Reveal) -> CellView {
        CellView {
            reveal,
            match_kind: MatchKind::None,
            highlight: None,
        }
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(4), PALETTE[4]);
        assert_eq!(palette_color(5), PALETTE[0]);
        assert_eq!(palette_color(12), PALETTE[2]);
    }

    #[test]
    fn keyboard_covers_alphabet_once() {
        let mut keys: Vec<char> = KEYBOARD.iter().flat_map(|(_, k)| k.chars()).collect();
        keys.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(keys, alphabet);
    }

    #[test]
    fn cell_text_per_reveal() {
        assert_eq!(cell_text(&view(Reveal::Hidden)), "   ");
        assert_eq!(cell_text(&view(Reveal::Covered)), " · ");
        assert_eq!(cell_text(&view(Reveal::Shown('K'))), " K ");
    }

    #[test]
    fn describe_outcome_mentions_letter() {
        let letter = Letter::new('e').unwrap();
        let advanced = describe_outcome(GuessOutcome::Advanced, letter, 2);
        assert!(advanced.contains("'E'"));
        assert!(advanced.contains("row 3"));
        assert!(describe_outcome(GuessOutcome::Missed, letter, 0).contains("failed"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
