//! Guessable letter representation
//!
//! A Letter is one of the 26 Latin letters, always stored uppercase.

use std::fmt;

/// A single guessable letter (A-Z), normalized to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

/// Error type for invalid letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    NonAscii(char),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAscii(ch) => write!(f, "Letter must be ASCII, got '{ch}'"),
            Self::NotAlphabetic(ch) => write!(f, "Letter must be A-Z, got '{ch}'"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// The full alphabet in order
    pub const ALPHABET: [Self; 26] = {
        let mut letters = [Self('A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Self((b'A' + i as u8) as char);
            i += 1;
        }
        letters
    };

    /// Create a new Letter from a char
    ///
    /// # Errors
    /// Returns `LetterError` if the char is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    ///
    /// assert!(Letter::new('3').is_err());
    /// assert!(Letter::new(' ').is_err());
    /// ```
    pub const fn new(ch: char) -> Result<Self, LetterError> {
        if !ch.is_ascii() {
            return Err(LetterError::NonAscii(ch));
        }
        if !ch.is_ascii_alphabetic() {
            return Err(LetterError::NotAlphabetic(ch));
        }
        Ok(Self(ch.to_ascii_uppercase()))
    }

    /// Get the letter as an uppercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_creation_uppercase_normalized() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
        assert_eq!(Letter::new('a'), Letter::new('A'));
    }

    #[test]
    fn letter_creation_invalid() {
        assert_eq!(Letter::new('1'), Err(LetterError::NotAlphabetic('1')));
        assert_eq!(Letter::new(' '), Err(LetterError::NotAlphabetic(' ')));
        assert_eq!(Letter::new('é'), Err(LetterError::NonAscii('é')));
    }

    #[test]
    fn alphabet_is_ordered_and_complete() {
        assert_eq!(Letter::ALPHABET[0].as_char(), 'A');
        assert_eq!(Letter::ALPHABET[25].as_char(), 'Z');
        assert!(Letter::ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn letter_display() {
        let letter = Letter::new('k').unwrap();
        assert_eq!(format!("{letter}"), "K");
    }
}
