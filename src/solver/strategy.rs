//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::frequency::{best_letter, fallback_letter};
use crate::core::SecretWord;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select a letter given the words still consistent with the round
    ///
    /// Returns `None` only when every letter has been guessed.
    fn select_letter(&self, candidates: &[&SecretWord], guessed: &[char]) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Letter coverage over candidates (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &[&SecretWord], guessed: &[char]) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, guessed),
            Self::Random(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "frequency" => Self::Frequency(FrequencyStrategy),
            other => {
                tracing::warn!(strategy = other, "unknown strategy, using frequency");
                Self::Frequency(FrequencyStrategy)
            }
        }
    }
}

/// Picks the letter contained in the most candidates
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&SecretWord], guessed: &[char]) -> Option<char> {
        best_letter(candidates, guessed).or_else(|| fallback_letter(guessed))
    }
}

/// Picks any unguessed letter at random, ignoring candidates
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, _candidates: &[&SecretWord], guessed: &[char]) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let open: Vec<char> = ('a'..='z').filter(|c| !guessed.contains(c)).collect();
        open.choose(&mut rand::rng()).copied()
    }
}
