//! Core domain types for Hangman
//!
//! The words, guesses and round rules. Everything here is pure and testable;
//! input and output live in `commands`, `output` and `interactive`.

mod gallows;
mod guess;
mod round;
mod stats;
mod word;

pub use gallows::{DEFAULT_BUDGET, HANGMAN_PICS, frame, frame_index};
pub use guess::{GuessError, validate_guess};
pub use round::{
    DEFAULT_PLACEHOLDER, GuessOutcome, Round, RoundStatus, blanks_for, check_loss, check_win,
    remaining_chances,
};
pub use stats::Statistics;
pub use word::{SecretWord, WordError};
