//! Hangman
//!
//! A console word-guessing game with a terminal UI and an automatic
//! letter-frequency player.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, RoundStatus, SecretWord};
//!
//! let mut round = Round::new(SecretWord::new("otter").unwrap());
//! round.guess("t").unwrap();
//! assert_eq!(round.blanks(), "_tt__");
//!
//! for letter in ["o", "e", "r"] {
//!     round.guess(letter).unwrap();
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Automatic player
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Settings and logging
pub mod config;
pub mod logging;
