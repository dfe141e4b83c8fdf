//! Letter matrix queries
//!
//! Pure functions over a [`Pack`] viewed as a ragged grid of chars. Nothing is
//! cached: packs are a handful of short rows, so every query just reads the
//! cells again.

use super::{Letter, Pack};

/// How a cell relates to the same column in its neighbouring rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Shares its letter with the row below
    Forward,
    /// Shares its letter with the row above
    Backward,
    None,
}

/// Whether a cell's letter is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Not a letter cell: padding, blank or out of bounds
    Hidden,
    /// A letter cell the player has not uncovered yet
    Covered,
    /// An uncovered letter, uppercase
    Shown(char),
}

/// Everything a renderer needs to draw one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub reveal: Reveal,
    pub match_kind: MatchKind,
    /// Palette slot for the match highlight, if any
    pub highlight: Option<usize>,
}

/// Check if a char is a letter cell
///
/// A letter cell is any char whose uppercase and lowercase forms differ, so
/// spaces, digits and punctuation are all blanks.
///
/// # Examples
/// ```
/// use word_ladder::core::is_letter_cell;
///
/// assert!(is_letter_cell('a'));
/// assert!(is_letter_cell('Ż'));
/// assert!(!is_letter_cell(' '));
/// assert!(!is_letter_cell('7'));
/// ```
#[must_use]
pub fn is_letter_cell(ch: char) -> bool {
    ch.to_uppercase().ne(ch.to_lowercase())
}

/// Get the char at (row, col), or `None` when out of bounds
#[inline]
#[must_use]
pub fn letter_at(pack: &Pack, row: usize, col: usize) -> Option<char> {
    pack.cells(row).and_then(|cells| cells.get(col)).copied()
}

/// Width of the widest row
#[must_use]
pub fn width(pack: &Pack) -> usize {
    (0..pack.row_count())
        .filter_map(|row| pack.cells(row).map(<[char]>::len))
        .max()
        .unwrap_or(0)
}

/// Determine how (row, col) matches its neighbours
///
/// Only letter cells can match. The first row has no row above and the last
/// row has no row below, so those comparisons never succeed there. When an
/// interior cell matches both neighbours, `Forward` wins.
///
/// # Examples
/// ```
/// use word_ladder::core::{MatchKind, Pack, match_kind};
///
/// let pack = Pack::new("demo", ["AB", "AC"]).unwrap();
/// assert_eq!(match_kind(&pack, 0, 0), MatchKind::Forward);
/// assert_eq!(match_kind(&pack, 1, 0), MatchKind::Backward);
/// assert_eq!(match_kind(&pack, 0, 1), MatchKind::None);
/// ```
#[must_use]
pub fn match_kind(pack: &Pack, row: usize, col: usize) -> MatchKind {
    let Some(ch) = letter_at(pack, row, col).filter(|&ch| is_letter_cell(ch)) else {
        return MatchKind::None;
    };

    let shares_with =
        |other: Option<usize>| other.and_then(|other| letter_at(pack, other, col)) == Some(ch);

    if shares_with(row.checked_add(1)) {
        MatchKind::Forward
    } else if shares_with(row.checked_sub(1)) {
        MatchKind::Backward
    } else {
        MatchKind::None
    }
}

/// Palette slot for a cell's match highlight
///
/// Forward matches use the cell's own row, backward matches the row above, so
/// both halves of a pair share a color.
#[inline]
#[must_use]
pub const fn highlight_slot(row: usize, kind: MatchKind) -> Option<usize> {
    match kind {
        MatchKind::Forward => Some(row),
        MatchKind::Backward => row.checked_sub(1),
        MatchKind::None => None,
    }
}

/// Build the view of a single cell for a player on `current_row`
///
/// Rows above the current one are fully shown. On the current row only
/// letters in `used_letters` are shown. Rows below stay covered.
#[must_use]
pub fn cell_view(
    pack: &Pack,
    row: usize,
    col: usize,
    current_row: usize,
    used_letters: &[Letter],
) -> CellView {
    let kind = match_kind(pack, row, col);
    let reveal = match letter_at(pack, row, col) {
        Some(ch) if is_letter_cell(ch) => {
            let upper = ch.to_uppercase().next().unwrap_or(ch);
            let used = used_letters.iter().any(|l| l.as_char() == upper);
            if row < current_row || (row == current_row && used) {
                Reveal::Shown(upper)
            } else {
                Reveal::Covered
            }
        }
        _ => Reveal::Hidden,
    };

    CellView {
        reveal,
        match_kind: kind,
        highlight: highlight_slot(row, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(rows: &[&str]) -> Pack {
        Pack::new("test", rows).unwrap()
    }

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::new(c).unwrap()).collect()
    }

    #[test]
    fn letter_cell_detection() {
        assert!(is_letter_cell('A'));
        assert!(is_letter_cell('z'));
        assert!(!is_letter_cell(' '));
        assert!(!is_letter_cell('-'));
        assert!(!is_letter_cell('0'));
    }

    #[test]
    fn letter_at_bounds() {
        let p = pack(&["AB", " CDE"]);
        assert_eq!(letter_at(&p, 0, 0), Some('A'));
        assert_eq!(letter_at(&p, 0, 2), None);
        assert_eq!(letter_at(&p, 1, 0), Some(' '));
        assert_eq!(letter_at(&p, 1, 3), Some('E'));
        assert_eq!(letter_at(&p, 2, 0), None);
    }

    #[test]
    fn width_is_widest_row() {
        let p = pack(&["CYCLING", " INSIDE", "    ELECTRICITY", "RECYCLING"]);
        assert_eq!(width(&p), 15);
    }

    #[test]
    fn first_row_only_forward() {
        let p = pack(&["AB", "AB"]);
        for col in 0..2 {
            assert_eq!(match_kind(&p, 0, col), MatchKind::Forward);
        }
        let p = pack(&["AB", "BC"]);
        for col in 0..2 {
            assert_eq!(match_kind(&p, 0, col), MatchKind::None);
        }
    }

    #[test]
    fn last_row_only_backward() {
        let p = pack(&["XA", "YA", "ZA"]);
        assert_eq!(match_kind(&p, 2, 1), MatchKind::Backward);
        assert_eq!(match_kind(&p, 2, 0), MatchKind::None);
    }

    #[test]
    fn interior_forward_takes_priority() {
        let p = pack(&["A", "A", "A"]);
        assert_eq!(match_kind(&p, 1, 0), MatchKind::Forward);
    }

    #[test]
    fn interior_backward_when_no_forward() {
        let p = pack(&["A", "A", "B"]);
        assert_eq!(match_kind(&p, 1, 0), MatchKind::Backward);
    }

    #[test]
    fn single_row_never_matches() {
        let p = pack(&["AAA"]);
        for col in 0..3 {
            assert_eq!(match_kind(&p, 0, col), MatchKind::None);
        }
    }

    #[test]
    fn blanks_and_absent_cells_never_match() {
        let p = pack(&[" A", " A", ""]);
        assert_eq!(match_kind(&p, 0, 0), MatchKind::None);
        assert_eq!(match_kind(&p, 2, 0), MatchKind::None);
        assert_eq!(match_kind(&p, 5, 5), MatchKind::None);
    }

    #[test]
    fn first_pack_ladder_links() {
        let p = pack(&["CYCLING", " INSIDE", "    ELECTRICITY", "RECYCLING"]);
        assert_eq!(match_kind(&p, 0, 4), MatchKind::Forward); // I
        assert_eq!(match_kind(&p, 1, 4), MatchKind::Backward);
        assert_eq!(match_kind(&p, 1, 6), MatchKind::Forward); // E
        assert_eq!(match_kind(&p, 2, 5), MatchKind::Forward); // L
        assert_eq!(match_kind(&p, 3, 5), MatchKind::Backward);
    }

    #[test]
    fn highlight_slots_pair_up() {
        assert_eq!(highlight_slot(2, MatchKind::Forward), Some(2));
        assert_eq!(highlight_slot(3, MatchKind::Backward), Some(2));
        assert_eq!(highlight_slot(0, MatchKind::Backward), None);
        assert_eq!(highlight_slot(1, MatchKind::None), None);
    }

    #[test]
    fn cell_view_reveal_rules() {
        let p = pack(&["AB", " BC", "CD"]);
        let used = letters("C");

        // Passed rows are fully shown
        assert_eq!(cell_view(&p, 0, 1, 1, &used).reveal, Reveal::Shown('B'));
        // Current row: only used letters
        assert_eq!(cell_view(&p, 1, 2, 1, &used).reveal, Reveal::Shown('C'));
        assert_eq!(cell_view(&p, 1, 1, 1, &used).reveal, Reveal::Covered);
        // Padding is hidden everywhere
        assert_eq!(cell_view(&p, 1, 0, 1, &used).reveal, Reveal::Hidden);
        // Future rows stay covered even for used letters
        assert_eq!(cell_view(&p, 2, 0, 1, &used).reveal, Reveal::Covered);
        // Out of bounds
        assert_eq!(cell_view(&p, 0, 9, 1, &used).reveal, Reveal::Hidden);
    }

    #[test]
    fn cell_view_carries_highlight() {
        let p = pack(&["AB", " BC"]);
        let view = cell_view(&p, 0, 1, 0, &[]);
        assert_eq!(view.match_kind, MatchKind::Forward);
        assert_eq!(view.highlight, Some(0));
        assert_eq!(view.reveal, Reveal::Covered);

        let view = cell_view(&p, 1, 1, 0, &[]);
        assert_eq!(view.match_kind, MatchKind::Backward);
        assert_eq!(view.highlight, Some(0));
    }
}
