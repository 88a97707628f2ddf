//! Word solving command
//!
//! Lets the automatic player guess a specific secret word and records each step.

use crate::config::GameConfig;
use crate::core::{GuessOutcome, Round, SecretWord, WordError};
use crate::solver::{Solver, Strategy};

/// Result of auto-playing a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    /// Hits needed to uncover the whole word
    pub distinct_letters: usize,
    pub won: bool,
    pub misses: usize,
    pub budget: usize,
    pub steps: Vec<GuessStep>,
}

/// A single guess in the played round
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub letter: char,
    pub hit: bool,
    pub blanks: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play a round for `secret` until it is won or lost
pub fn auto_play<S: Strategy>(
    secret: SecretWord,
    solver: &Solver<S>,
    config: &GameConfig,
) -> SolveResult {
    let target = secret.text().to_string();
    let distinct_letters = secret.distinct_letters();
    let mut round = Round::with_rules(secret, config.mistake_budget, config.placeholder);
    let mut steps = Vec::new();

    while !round.status().is_over() {
        let candidates_before = solver.count_candidates(&round);
        let Some(letter) = solver.next_letter(&round) else {
            break;
        };

        // The solver only offers unguessed letters, so this cannot be rejected
        let Ok(outcome) = round.guess(&letter.to_string()) else {
            tracing::warn!(%letter, "solver offered a rejected letter");
            break;
        };

        steps.push(GuessStep {
            letter,
            hit: matches!(outcome, GuessOutcome::Hit { .. }),
            blanks: round.blanks(),
            candidates_before,
            candidates_after: solver.count_candidates(&round),
        });
    }

    SolveResult {
        target,
        distinct_letters,
        won: round.is_won(),
        misses: round.missed().len(),
        budget: round.budget(),
        steps,
    }
}

/// Solve a specific word using the given solver
///
/// The word does not have to be in the solver's word list.
///
/// # Errors
///
/// Returns an error if the target is not a valid secret word.
pub fn solve_word<S: Strategy>(
    target: &str,
    solver: &Solver<S>,
    config: &GameConfig,
) -> Result<SolveResult, WordError> {
    let secret = SecretWord::new(target)?;
    Ok(auto_play(secret, solver, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_in_list() {
        let words = words_from_slice(&["cat", "bat", "rat", "owl"]);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = solve_word("rat", &solver, &GameConfig::default()).unwrap();
        assert!(result.won);
        assert_eq!(result.target, "rat");
        assert_eq!(result.distinct_letters, 3);
        assert_eq!(
            result.steps.iter().filter(|s| s.hit).count(),
            result.distinct_letters
        );
        assert_eq!(result.steps.first().map(|s| s.letter), Some('a'));
        assert_eq!(result.steps.last().map(|s| s.blanks.as_str()), Some("rat"));
        assert_eq!(
            result.misses,
            result.steps.iter().filter(|s| !s.hit).count()
        );
    }

    #[test]
    fn candidates_never_grow() {
        let words = words_from_slice(&["otter", "raven", "trout", "tiger", "rhino"]);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = solve_word("tiger", &solver, &GameConfig::default()).unwrap();
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.steps.last().map(|s| s.candidates_after), Some(1));
    }

    #[test]
    fn solve_word_outside_list_ends() {
        let words = words_from_slice(&["cat"]);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = solve_word("jazz", &solver, &GameConfig::default()).unwrap();
        assert!(result.won || result.misses == result.budget);
        assert!(!result.steps.is_empty());
    }

    #[test]
    fn solve_word_invalid_target() {
        let words = words_from_slice(&["cat"]);
        let solver = Solver::new(FrequencyStrategy, &words);
        assert!(solve_word("c4t", &solver, &GameConfig::default()).is_err());
    }
}
