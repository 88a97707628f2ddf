//! Automatic Hangman player
//!
//! Narrows the word list to the words consistent with a round and picks the
//! next letter to guess.

mod engine;
pub mod frequency;
pub mod strategy;

pub use engine::{Solver, is_candidate};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
