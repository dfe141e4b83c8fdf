//! Puzzle packs for word ladders
//!
//! Provides the embedded pack set compiled into the binary and the
//! [`PuzzleSet`] collection the game selects packs from.

mod embedded;
pub mod loader;

pub use embedded::{PACKS, PACKS_COUNT};

use crate::core::Pack;

/// Ordered, non-empty collection of packs
#[derive(Debug, Clone)]
pub struct PuzzleSet {
    packs: Vec<Pack>,
}

impl PuzzleSet {
    /// Wrap a list of packs, or `None` if it is empty
    #[must_use]
    pub fn new(packs: Vec<Pack>) -> Option<Self> {
        if packs.is_empty() {
            None
        } else {
            Some(Self { packs })
        }
    }

    /// The packs compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded data is empty or holds an invalid pack, which
    /// the build script already refuses to generate.
    #[must_use]
    pub fn embedded() -> Self {
        let packs =
            loader::packs_from_slice(PACKS).expect("embedded packs are validated at build time");
        Self::new(packs).expect("embedded pack list is never empty")
    }

    /// Pack at `index`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Pack> {
        self.packs.get(index)
    }

    /// First pack; always present
    #[inline]
    #[must_use]
    pub fn first(&self) -> &Pack {
        &self.packs[0]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Always false; kept alongside `len` for clippy
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pack> {
        self.packs.iter()
    }
}

impl<'a> IntoIterator for &'a PuzzleSet {
    type Item = &'a Pack;
    type IntoIter = std::slice::Iter<'a, Pack>;

    fn into_iter(self) -> Self::IntoIter {
        self.packs.iter()
    }
}
