//! Guess validation
//!
//! A guess is a single ASCII letter that has not been guessed yet this round.
//! Rejected guesses are ordinary values, the caller reports them and asks again.

use thiserror::Error;

/// Reason a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a letter.")]
    Empty,
    #[error("Please enter a single letter, got {0} characters.")]
    NotSingle(usize),
    #[error("Please enter a LETTER, '{0}' is not one.")]
    NotALetter(char),
    #[error("You have already guessed '{0}'. Choose again.")]
    AlreadyGuessed(char),
    #[error("The round is already over.")]
    RoundOver,
}

/// Validate raw input against the letters already guessed
///
/// Input is trimmed and lowercased before checking.
///
/// # Errors
/// Returns a `GuessError` describing why the input is not an acceptable guess.
///
/// # Examples
/// ```
/// use hangman::core::{GuessError, validate_guess};
///
/// assert_eq!(validate_guess(" A ", &['b', 'c']), Ok('a'));
/// assert_eq!(validate_guess("1", &[]), Err(GuessError::NotALetter('1')));
/// assert_eq!(validate_guess("b", &['b']), Err(GuessError::AlreadyGuessed('b')));
/// ```
pub fn validate_guess(input: &str, already_guessed: &[char]) -> Result<char, GuessError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    let Some(first) = chars.next() else {
        return Err(GuessError::Empty);
    };

    if chars.next().is_some() {
        return Err(GuessError::NotSingle(trimmed.chars().count()));
    }

    if !first.is_ascii_alphabetic() {
        return Err(GuessError::NotALetter(first));
    }

    let letter = first.to_ascii_lowercase();
    if already_guessed.contains(&letter) {
        return Err(GuessError::AlreadyGuessed(letter));
    }

    Ok(letter)
}
