//! Terminal output formatting
//!
//! Board rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    loss_banner, print_benchmark_result, print_solve_result, remaining_info, render_board,
    win_banner,
};
