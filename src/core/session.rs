//! Game session state machine
//!
//! A GameSession owns the play state for one pack and applies guesses to it.

use super::matrix::{self, CellView, MatchKind};
use super::{Letter, Pack};

/// Which branch of the guess transition fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter found on the last row: score without advancing
    Scored,
    /// Letter found at a column linking to the next row: advance and score
    Advanced,
    /// Letter not in the current word: failed attempt
    Missed,
    /// Letter in the word but not at a linking column: nothing changes
    Accepted,
}

/// Read-only view of the session for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub pack: &'a Pack,
    pub current_row: usize,
    pub used_letters: &'a [Letter],
    pub failed_attempts: u32,
    pub score: u32,
}

impl Snapshot<'_> {
    /// Score minus failed attempts
    #[must_use]
    pub fn net_result(&self) -> i64 {
        i64::from(self.score) - i64::from(self.failed_attempts)
    }
}

/// Play state for the active pack
///
/// `current_row` only moves forward and both counters only grow until the
/// next [`GameSession::select_pack`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pack: Pack,
    current_row: usize,
    used_letters: Vec<Letter>,
    failed_attempts: u32,
    score: u32,
}

impl GameSession {
    /// Start a fresh session on `pack`
    #[must_use]
    pub const fn new(pack: Pack) -> Self {
        Self {
            pack,
            current_row: 0,
            used_letters: Vec::new(),
            failed_attempts: 0,
            score: 0,
        }
    }

    /// Replace the active pack and reset all play state
    pub fn select_pack(&mut self, pack: Pack) {
        self.pack = pack;
        self.current_row = 0;
        self.used_letters.clear();
        self.failed_attempts = 0;
        self.score = 0;
    }

    /// Apply one letter guess to the current row
    ///
    /// The checks run in a fixed order:
    /// 1. On the last row, any letter of the word scores.
    /// 2. Otherwise, if the letter's first column links to the next row, the
    ///    session advances and scores. Used letters restart with this letter.
    /// 3. Otherwise, a letter missing from the word is a failed attempt.
    /// 4. Otherwise nothing but the used letters changes.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{GameSession, GuessOutcome, Letter, Pack};
    ///
    /// let pack = Pack::new("demo", ["AB", "AC"]).unwrap();
    /// let mut session = GameSession::new(pack);
    ///
    /// let outcome = session.guess_letter(Letter::new('A').unwrap());
    /// assert_eq!(outcome, GuessOutcome::Advanced);
    /// assert_eq!(session.current_row(), 1);
    /// assert_eq!(session.score(), 1);
    /// ```
    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        self.used_letters.push(letter);

        let index = self.pack.first_column(self.current_row, letter.as_char());

        if self.current_row == self.pack.last_row() && index.is_some() {
            self.score += 1;
            GuessOutcome::Scored
        } else if index.is_some_and(|col| {
            matrix::match_kind(&self.pack, self.current_row, col) == MatchKind::Forward
        }) {
            self.current_row += 1;
            self.used_letters.clear();
            self.used_letters.push(letter);
            self.score += 1;
            GuessOutcome::Advanced
        } else if index.is_none() {
            self.failed_attempts += 1;
            GuessOutcome::Missed
        } else {
            GuessOutcome::Accepted
        }
    }

    /// Active pack
    #[inline]
    #[must_use]
    pub const fn pack(&self) -> &Pack {
        &self.pack
    }

    /// Row the player is working on
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Letters guessed since the current row attempt began
    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &[Letter] {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Score minus failed attempts
    #[inline]
    #[must_use]
    pub fn net_result(&self) -> i64 {
        self.snapshot().net_result()
    }

    /// Check if a letter was already guessed on the current row attempt
    #[inline]
    #[must_use]
    pub fn is_letter_used(&self, letter: Letter) -> bool {
        self.used_letters.contains(&letter)
    }

    /// Check if the last row is current and every one of its letters is used
    ///
    /// This is informational only; guessing on the last row keeps scoring.
    #[must_use]
    pub fn is_board_revealed(&self) -> bool {
        self.current_row == self.pack.last_row()
            && self.pack.cells(self.current_row).is_some_and(|cells| {
                cells
                    .iter()
                    .filter(|&&ch| matrix::is_letter_cell(ch))
                    .all(|&ch| self.used_letters.iter().any(|l| l.as_char() == ch))
            })
    }

    /// View of one cell under the current state
    #[must_use]
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        matrix::cell_view(&self.pack, row, col, self.current_row, &self.used_letters)
    }

    /// Read-only snapshot for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            pack: &self.pack,
            current_row: self.current_row,
            used_letters: &self.used_letters,
            failed_attempts: self.failed_attempts,
            score: self.score,
        }
    }
}
