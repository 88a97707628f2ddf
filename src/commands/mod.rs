//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{Console, run_simple};
pub use solve::{GuessStep, SolveResult, auto_play, solve_word};
