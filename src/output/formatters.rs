//! Formatting utilities for terminal output

/// Put a space between every character, e.g. `"_a__"` becomes `"_ a _ _"`
///
/// Every character counts as a position, whitespace included.
#[must_use]
pub fn spaced(blanks: &str) -> String {
    let mut result = String::with_capacity(blanks.len() * 2);
    for (i, c) in blanks.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Letters separated by spaces, in the order given
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    spaced(&letters.iter().collect::<String>())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining chances drawn as a bar the width of the budget
#[must_use]
pub fn chances_bar(remaining: usize, budget: usize) -> String {
    create_progress_bar(remaining, budget, budget)
}
