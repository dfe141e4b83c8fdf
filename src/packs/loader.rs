//! Pack loading utilities
//!
//! Provides functions to load packs from files or from the embedded constants.
//!
//! The file format is line based:
//! - `[Name]` starts a new pack
//! - every other non-empty line is a row of the current pack, kept verbatim
//!   apart from trailing whitespace
//! - lines starting with `#` are comments

use super::PuzzleSet;
use crate::core::{Pack, PackError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for pack loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A row appeared before any `[Name]` header
    OrphanRow { line: usize },
    InvalidPack(PackError),
    NoPacks,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read pack file: {err}"),
            Self::OrphanRow { line } => {
                write!(f, "Line {line}: row appears before any [pack] header")
            }
            Self::InvalidPack(err) => write!(f, "{err}"),
            Self::NoPacks => write!(f, "Pack file contains no packs"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidPack(err) => Some(err),
            Self::OrphanRow { .. } | Self::NoPacks => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PackError> for LoadError {
    fn from(err: PackError) -> Self {
        Self::InvalidPack(err)
    }
}

/// Load a puzzle set from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, a row has no header, a
/// pack has no rows or a letter outside A-Z, or the file defines no packs
/// at all.
///
/// # Examples
/// ```no_run
/// use word_ladder::packs::loader::load_from_file;
///
/// let set = load_from_file("data/packs.txt").unwrap();
/// println!("Loaded {} packs", set.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PuzzleSet, LoadError> {
    let content = fs::read_to_string(path)?;
    let packs = parse_packs(&content)?;
    PuzzleSet::new(packs).ok_or(LoadError::NoPacks)
}

/// Parse packs from text in the pack file format
///
/// # Errors
///
/// Returns `LoadError::OrphanRow` for a row before the first header and
/// `LoadError::InvalidPack` for a header with no rows or a row holding a
/// letter outside A-Z.
pub fn parse_packs(content: &str) -> Result<Vec<Pack>, LoadError> {
    let mut pending: Vec<(String, Vec<String>)> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            pending.push((name.trim().to_string(), Vec::new()));
        } else if let Some((_, rows)) = pending.last_mut() {
            rows.push(line.to_string());
        } else {
            return Err(LoadError::OrphanRow { line: idx + 1 });
        }
    }

    pending
        .into_iter()
        .map(|(name, rows)| Pack::new(name, rows).map_err(LoadError::from))
        .collect()
}

/// Convert embedded (name, rows) pairs to Pack vector
///
/// # Errors
///
/// Returns the first `PackError` among the entries, so a bad entry is never
/// dropped silently.
///
/// # Examples
/// ```
/// use word_ladder::packs::loader::packs_from_slice;
/// use word_ladder::packs::PACKS;
///
/// let packs = packs_from_slice(PACKS).unwrap();
/// assert_eq!(packs.len(), PACKS.len());
/// ```
pub fn packs_from_slice(slice: &[(&str, &[&str])]) -> Result<Vec<Pack>, PackError> {
    slice
        .iter()
        .map(|&(name, rows)| Pack::new(name, rows))
        .collect()
}
