//! Secret word representation
//!
//! A `SecretWord` stores a validated lowercase word along with the positions of
//! each letter, so revealing a guessed letter uncovers all of its occurrences.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A word that can be guessed in a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Python").unwrap();
    /// assert_eq!(word.text(), "python");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("py7hon").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, empty words are rejected by `new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_positions.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("python").unwrap();
        assert_eq!(word.text(), "python");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = SecretWord::new("  HangMan\n").unwrap();
        assert_eq!(word.text(), "hangman");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(SecretWord::new("pyth0n").is_err()); // Number
        assert!(SecretWord::new("ice cream").is_err()); // Space
        assert!(SecretWord::new("don't").is_err()); // Punctuation
        assert!(SecretWord::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(SecretWord::new("apple").unwrap().distinct_letters(), 4);
        assert_eq!(SecretWord::new("aaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("otter").unwrap();
        assert_eq!(format!("{word}"), "otter");
    }
}
