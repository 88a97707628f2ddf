//! Word lists for Hangman
//!
//! Provides the embedded default list, file loading, and secret word selection.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a secret word uniformly at random
///
/// Returns `None` for an empty list.
pub fn pick_random<'a, R: Rng + ?Sized>(
    words: &'a [SecretWord],
    rng: &mut R,
) -> Option<&'a SecretWord> {
    words.choose(rng)
}
