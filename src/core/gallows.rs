//! ASCII art gallows, one frame per missed letter

/// Gallows frames, from an empty gallows to a complete figure
pub const HANGMAN_PICS: [&str; 7] = [
    r"
  +---+
      |
      |
      |
     ===",
    r"
  +---+
  O   |
      |
      |
     ===",
    r"
  +---+
  O   |
  |   |
      |
     ===",
    r"
  +---+
  O   |
 /|   |
      |
     ===",
    r"
  +---+
  O   |
 /|\  |
      |
     ===",
    r"
  +---+
  O   |
 /|\  |
 /    |
     ===",
    r"
  +---+
  O   |
 /|\  |
 / \  |
     ===",
];

/// Mistake budget matching the number of frames
pub const DEFAULT_BUDGET: usize = HANGMAN_PICS.len() - 1;

/// Frame index to show for `missed` misses out of `budget`
///
/// Budgets other than the default are scaled onto the available frames, so
/// the full figure always appears exactly when the round is lost.
#[must_use]
pub fn frame_index(missed: usize, budget: usize) -> usize {
    if budget == 0 || missed >= budget {
        return DEFAULT_BUDGET;
    }
    (missed * DEFAULT_BUDGET / budget).min(DEFAULT_BUDGET)
}

/// Art for `missed` misses out of `budget`
#[must_use]
pub fn frame(missed: usize, budget: usize) -> &'static str {
    HANGMAN_PICS[frame_index(missed, budget)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_six() {
        assert_eq!(DEFAULT_BUDGET, 6);
    }

    #[test]
    fn default_budget_maps_one_to_one() {
        for missed in 0..=DEFAULT_BUDGET {
            assert_eq!(frame_index(missed, DEFAULT_BUDGET), missed);
        }
    }

    #[test]
    fn over_budget_clamps_to_last_frame() {
        assert_eq!(frame_index(9, DEFAULT_BUDGET), 6);
    }

    #[test]
    fn larger_budget_is_scaled() {
        assert_eq!(frame_index(0, 12), 0);
        assert_eq!(frame_index(6, 12), 3);
        assert_eq!(frame_index(11, 12), 5);
        assert_eq!(frame_index(12, 12), 6);
    }

    #[test]
    fn smaller_budget_reaches_full_figure_on_loss() {
        assert_eq!(frame_index(1, 3), 2);
        assert_eq!(frame_index(3, 3), 6);
    }

    #[test]
    fn first_and_last_frames() {
        assert!(!frame(0, 6).contains('O'));
        assert!(frame(6, 6).contains("/ \\"));
    }
}
