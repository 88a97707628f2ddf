//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Round, SecretWord};

/// Check whether `word` could be the secret behind the visible round state
///
/// `blanks` uses `placeholder` for hidden positions. A consistent word matches
/// every revealed position, holds no revealed letter in a hidden position (a
/// correct guess uncovers every occurrence), and contains no missed letter.
#[must_use]
pub fn is_candidate(word: &SecretWord, blanks: &str, placeholder: char, missed: &[char]) -> bool {
    if word.len() != blanks.chars().count() {
        return false;
    }

    let revealed: Vec<char> = blanks.chars().filter(|&c| c != placeholder).collect();

    word.letters().zip(blanks.chars()).all(|(letter, shown)| {
        if shown == placeholder {
            !revealed.contains(&letter) && !missed.contains(&letter)
        } else {
            letter == shown
        }
    })
}

/// Automatic Hangman player
///
/// Coordinates candidate filtering and letter selection using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [SecretWord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    pub const fn new(strategy: S, words: &'a [SecretWord]) -> Self {
        Self { strategy, words }
    }

    /// Words from the list consistent with what the round shows
    pub fn candidates(&self, round: &Round) -> Vec<&'a SecretWord> {
        let blanks = round.blanks();
        self.words
            .iter()
            .filter(|word| is_candidate(word, &blanks, round.placeholder(), round.missed()))
            .collect()
    }

    /// Count how many candidates remain for the round
    pub fn count_candidates(&self, round: &Round) -> usize {
        self.candidates(round).len()
    }

    /// Next letter to guess, or `None` once every letter has been tried
    pub fn next_letter(&self, round: &Round) -> Option<char> {
        let candidates = self.candidates(round);
        self.strategy.select_letter(&candidates, &round.guessed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> SecretWord {
        SecretWord::new(text).unwrap()
    }

    #[test]
    fn candidate_matches_revealed_positions() {
        assert!(is_candidate(&word("cat"), "_a_", '_', &[]));
        assert!(!is_candidate(&word("cot"), "_a_", '_', &[]));
    }

    #[test]
    fn candidate_rejects_length_mismatch() {
        assert!(!is_candidate(&word("cats"), "_a_", '_', &[]));
    }

    #[test]
    fn candidate_rejects_missed_letters() {
        assert!(!is_candidate(&word("cat"), "_a_", '_', &['c']));
        assert!(is_candidate(&word("bat"), "_a_", '_', &['c']));
    }

    #[test]
    fn candidate_rejects_revealed_letter_in_hidden_slot() {
        // Guessing 'a' would have uncovered both positions of "aha"
        assert!(!is_candidate(&word("aha"), "a__", '_', &[]));
        assert!(is_candidate(&word("ant"), "a__", '_', &[]));
    }

    #[test]
    fn solver_narrows_candidates_as_round_progresses() {
        let words = words_from_slice(&["cat", "bat", "cot", "owl", "rats"]);
        let solver = Solver::new(FrequencyStrategy, &words);
        let mut round = Round::new(word("cat"));

        assert_eq!(solver.count_candidates(&round), 4);

        round.guess("a").unwrap();
        let texts: Vec<&str> = solver
            .candidates(&round)
            .into_iter()
            .map(SecretWord::text)
            .collect();
        assert_eq!(texts, ["cat", "bat"]);

        round.guess("b").unwrap();
        let texts: Vec<&str> = solver
            .candidates(&round)
            .into_iter()
            .map(SecretWord::text)
            .collect();
        assert_eq!(texts, ["cat"]);
    }

    #[test]
    fn solver_next_letter_is_unguessed() {
        let words = words_from_slice(&["cat", "bat", "rat"]);
        let solver = Solver::new(FrequencyStrategy, &words);
        let mut round = Round::new(word("rat"));

        let first = solver.next_letter(&round).unwrap();
        assert_eq!(first, 'a');
        round.guess(&first.to_string()).unwrap();

        let second = solver.next_letter(&round).unwrap();
        assert_eq!(second, 't');
    }

    #[test]
    fn solver_wins_when_secret_is_in_list() {
        let words = words_from_slice(&["otter", "raven", "trout", "weasel", "wombat"]);
        let solver = Solver::new(FrequencyStrategy, &words);

        for secret in &words {
            let mut round = Round::new(secret.clone());
            while !round.status().is_over() {
                let letter = solver.next_letter(&round).unwrap();
                round.guess(&letter.to_string()).unwrap();
            }
            assert!(round.is_won(), "lost on {secret}");
        }
    }
}
