//! Puzzle pack representation
//!
//! A Pack is one complete word ladder: an ordered list of rows where leading
//! spaces shift a word to the right so that neighbouring words line up on a
//! shared letter.

use super::matrix::is_letter_cell;
use rustc_hash::FxHashMap;
use std::fmt;

/// One word ladder puzzle
///
/// Rows are stored uppercase, both as text and as per-column chars, so that
/// column lookups don't have to walk the string. Each row also keeps the
/// first column of every char it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    name: String,
    rows: Vec<String>,
    cells: Vec<Vec<char>>,
    first_columns: Vec<FxHashMap<char, usize>>,
}

/// Error type for invalid packs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    Empty(String),
    /// A letter cell outside A-Z, which no guess could ever uncover
    UnsupportedChar { row: usize, col: usize, ch: char },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "Pack '{name}' must contain at least one row"),
            Self::UnsupportedChar { row, col, ch } => write!(
                f,
                "Row {}, column {}: letter '{ch}' is not in A-Z",
                row + 1,
                col + 1
            ),
        }
    }
}

impl std::error::Error for PackError {}

impl Pack {
    /// Create a new Pack from its rows
    ///
    /// Rows are uppercased char by char, so every column keeps its index;
    /// leading spaces are kept as column offset.
    ///
    /// # Errors
    /// Returns `PackError::Empty` if `rows` is empty, and
    /// `PackError::UnsupportedChar` for a letter cell outside A-Z.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Pack;
    ///
    /// let pack = Pack::new("demo", ["ab", " bc"]).unwrap();
    /// assert_eq!(pack.row(1), Some(" BC"));
    ///
    /// assert!(Pack::new("empty", Vec::<String>::new()).is_err());
    /// assert!(Pack::new("accents", ["ŻAR"]).is_err());
    /// ```
    pub fn new<I, S>(name: impl Into<String>, rows: I) -> Result<Self, PackError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let cells = rows
            .into_iter()
            .enumerate()
            .map(|(row, text)| uppercase_cells(row, text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if cells.is_empty() {
            return Err(PackError::Empty(name));
        }

        let rows: Vec<String> = cells.iter().map(|row| row.iter().collect()).collect();

        // Build first-occurrence map for fast lookup
        let first_columns = cells
            .iter()
            .map(|row| {
                let mut columns: FxHashMap<char, usize> = FxHashMap::default();
                for (col, &ch) in row.iter().enumerate() {
                    columns.entry(ch).or_insert(col);
                }
                columns
            })
            .collect();

        Ok(Self {
            name,
            rows,
            cells,
            first_columns,
        })
    }

    /// Display name of the pack
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows (always at least 1)
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the final row
    #[inline]
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.rows.len() - 1
    }

    /// Row text including its leading padding, or `None` past the end
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// All rows in order
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Per-column chars of a row, or `None` past the end
    #[inline]
    #[must_use]
    pub fn cells(&self, row: usize) -> Option<&[char]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// First column of `ch` in `row`, or `None` if the row lacks it
    #[inline]
    #[must_use]
    pub fn first_column(&self, row: usize, ch: char) -> Option<usize> {
        self.first_columns
            .get(row)
            .and_then(|columns| columns.get(&ch))
            .copied()
    }
}

/// Uppercase one row without changing its length
fn uppercase_cells(row: usize, text: &str) -> Result<Vec<char>, PackError> {
    text.chars()
        .enumerate()
        .map(|(col, ch)| {
            if ch.is_ascii_alphabetic() {
                Ok(ch.to_ascii_uppercase())
            } else if is_letter_cell(ch) {
                Err(PackError::UnsupportedChar { row, col, ch })
            } else {
                Ok(ch)
            }
        })
        .collect()
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_creation_uppercases_rows() {
        let pack = Pack::new("demo", ["cycling", " inside"]).unwrap();
        assert_eq!(pack.row(0), Some("CYCLING"));
        assert_eq!(pack.row(1), Some(" INSIDE"));
        assert_eq!(pack.row(2), None);
    }

    #[test]
    fn pack_creation_keeps_padding() {
        let pack = Pack::new("demo", ["    ELECTRICITY"]).unwrap();
        let cells = pack.cells(0).unwrap();
        assert_eq!(cells.len(), 15);
        assert_eq!(&cells[..5], &[' ', ' ', ' ', ' ', 'E']);
    }

    #[test]
    fn pack_creation_empty_rejected() {
        let result = Pack::new("nothing", Vec::<&str>::new());
        assert_eq!(result, Err(PackError::Empty("nothing".to_string())));
    }

    #[test]
    fn pack_creation_rejects_non_ascii_letters() {
        // Uppercasing 'ß' would yield "SS" and shift every later column
        assert_eq!(
            Pack::new("demo", ["ßA", " A"]),
            Err(PackError::UnsupportedChar {
                row: 0,
                col: 0,
                ch: 'ß'
            })
        );
        assert_eq!(
            Pack::new("demo", ["AB", " ŻAR"]),
            Err(PackError::UnsupportedChar {
                row: 1,
                col: 1,
                ch: 'Ż'
            })
        );
    }

    #[test]
    fn pack_creation_keeps_columns_of_non_letters() {
        let pack = Pack::new("demo", ["·a-b", " A"]).unwrap();
        assert_eq!(pack.row(0), Some("·A-B"));
        assert_eq!(pack.cells(0).unwrap().len(), 4);
        assert_eq!(pack.first_column(0, 'A'), Some(1));
        assert_eq!(pack.first_column(0, 'B'), Some(3));
    }

    #[test]
    fn unsupported_char_message() {
        let err = PackError::UnsupportedChar {
            row: 0,
            col: 2,
            ch: 'Ż',
        };
        assert_eq!(err.to_string(), "Row 1, column 3: letter 'Ż' is not in A-Z");
    }

    #[test]
    fn pack_row_counts() {
        let pack = Pack::new("demo", ["AB", "BC", "CD"]).unwrap();
        assert_eq!(pack.row_count(), 3);
        assert_eq!(pack.last_row(), 2);
        assert_eq!(pack.rows().collect::<Vec<_>>(), vec!["AB", "BC", "CD"]);
    }

    #[test]
    fn pack_first_column() {
        let pack = Pack::new("demo", ["RECYCLING", " A"]).unwrap();
        assert_eq!(pack.first_column(0, 'C'), Some(2));
        assert_eq!(pack.first_column(0, 'G'), Some(8));
        assert_eq!(pack.first_column(0, 'Z'), None);
        assert_eq!(pack.first_column(1, ' '), Some(0));
        assert_eq!(pack.first_column(5, 'A'), None);
    }

    #[test]
    fn pack_display_uses_name() {
        let pack = Pack::new("Result pack 1", ["AB"]).unwrap();
        assert_eq!(format!("{pack}"), "Result pack 1");
    }
}
