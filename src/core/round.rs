//! Round state and the rules of the game
//!
//! The free functions are the rules over plain letter slices. `Round` owns the
//! per-round state and applies those rules as guesses come in.

use super::gallows::DEFAULT_BUDGET;
use super::guess::{GuessError, validate_guess};
use super::word::SecretWord;

/// Placeholder shown for letters not uncovered yet
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Display string for `word`, hiding letters not in `correct`
#[must_use]
pub fn blanks_for(word: &str, correct: &[char], placeholder: char) -> String {
    word.chars()
        .map(|c| if correct.contains(&c) { c } else { placeholder })
        .collect()
}

/// True when every letter of `word` has been guessed
#[must_use]
pub fn check_win(correct: &[char], word: &str) -> bool {
    word.chars().all(|c| correct.contains(&c))
}

/// True when the misses have used up the budget
#[must_use]
pub const fn check_loss(missed: usize, budget: usize) -> bool {
    missed >= budget
}

/// Chances left before the round is lost
#[must_use]
pub const fn remaining_chances(missed: usize, budget: usize) -> usize {
    budget.saturating_sub(missed)
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Effect of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` positions were uncovered
    Hit { letter: char, revealed: usize },
    /// The letter is not in the word
    Miss { letter: char },
}

/// A single round of Hangman
#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretWord,
    missed: Vec<char>,
    correct: Vec<char>,
    budget: usize,
    placeholder: char,
}

impl Round {
    /// Start a round with the default budget and placeholder
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self::with_rules(secret, DEFAULT_BUDGET, DEFAULT_PLACEHOLDER)
    }

    /// Start a round with a custom budget and placeholder
    #[must_use]
    pub fn with_rules(secret: SecretWord, budget: usize, placeholder: char) -> Self {
        Self {
            secret,
            missed: Vec::new(),
            correct: Vec::new(),
            budget,
            placeholder,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Wrong guesses, in the order they were made
    #[must_use]
    pub fn missed(&self) -> &[char] {
        &self.missed
    }

    /// Right guesses, in the order they were made
    #[must_use]
    pub fn correct(&self) -> &[char] {
        &self.correct
    }

    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    #[must_use]
    pub const fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Every letter guessed so far, missed ones first
    #[must_use]
    pub fn guessed(&self) -> Vec<char> {
        self.missed.iter().chain(&self.correct).copied().collect()
    }

    /// Check whether a letter was already guessed this round
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.missed.contains(&letter) || self.correct.contains(&letter)
    }

    /// Current blanks, e.g. `"pyth_n"`
    #[must_use]
    pub fn blanks(&self) -> String {
        blanks_for(self.secret.text(), &self.correct, self.placeholder)
    }

    /// Number of letter positions still hidden
    #[must_use]
    pub fn letters_to_uncover(&self) -> usize {
        self.secret
            .letters()
            .filter(|c| !self.correct.contains(c))
            .count()
    }

    #[must_use]
    pub fn remaining_chances(&self) -> usize {
        remaining_chances(self.missed.len(), self.budget)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        check_win(&self.correct, self.secret.text())
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        check_loss(self.missed.len(), self.budget)
    }

    /// A win takes precedence; the last guess of a round cannot both win and lose
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Validate raw input and apply it
    ///
    /// # Errors
    /// Returns `GuessError` when the input is not a fresh letter or the round
    /// is over. The round is unchanged in that case.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::RoundOver);
        }
        let letter = validate_guess(input, &self.guessed())?;
        Ok(self.apply(letter))
    }

    /// Apply an already validated letter
    fn apply(&mut self, letter: char) -> GuessOutcome {
        let revealed = self.secret.positions_of(letter).len();
        if revealed == 0 {
            self.missed.push(letter);
            tracing::debug!(%letter, missed = self.missed.len(), "missed letter");
            GuessOutcome::Miss { letter }
        } else {
            self.correct.push(letter);
            tracing::debug!(%letter, revealed, "correct letter");
            GuessOutcome::Hit { letter, revealed }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(SecretWord::new(word).unwrap())
    }

    #[test]
    fn blanks_for_hidden_word() {
        assert_eq!(blanks_for("python", &[], '_'), "______");
    }

    #[test]
    fn blanks_for_partially_revealed() {
        assert_eq!(blanks_for("python", &['p', 'y', 't', 'h', 'n'], '_'), "pyth_n");
    }

    #[test]
    fn initial_blanks_are_all_placeholders() {
        for word in ["a", "ant", "hangman", "mississippi", "rhythm"] {
            let blanks = round(word).blanks();
            assert_eq!(blanks.chars().count(), word.len());
            assert!(blanks.chars().all(|c| c == DEFAULT_PLACEHOLDER), "{blanks}");
        }
    }

    #[test]
    fn custom_placeholder() {
        let round = Round::with_rules(SecretWord::new("owl").unwrap(), 6, '*');
        assert_eq!(round.blanks(), "***");
    }

    #[test]
    fn check_win_cases() {
        assert!(check_win(&['a', 'p', 'l', 'e'], "apple"));
        assert!(!check_win(&['a', 'p', 'l'], "apple"));
        assert!(!check_win(&[], "apple"));
        assert!(check_win(&['a', 'p', 'l', 'e'], ""));
    }

    #[test]
    fn check_loss_cases() {
        assert!(!check_loss(0, 6));
        assert!(!check_loss(5, 6));
        assert!(check_loss(6, 6));
        assert!(check_loss(7, 6));
    }

    #[test]
    fn remaining_chances_saturates() {
        assert_eq!(remaining_chances(0, 6), 6);
        assert_eq!(remaining_chances(2, 6), 4);
        assert_eq!(remaining_chances(6, 6), 0);
        assert_eq!(remaining_chances(7, 6), 0);
    }

    #[test]
    fn guessing_every_letter_wins_in_any_order() {
        let orders: [&[&str]; 3] = [
            &["t", "e", "s"],
            &["s", "t", "e"],
            &["e", "s", "t"],
        ];
        for order in orders {
            let mut round = round("test");
            for letter in order {
                round.guess(letter).unwrap();
            }
            assert_eq!(round.status(), RoundStatus::Won, "{order:?}");
            assert_eq!(round.letters_to_uncover(), 0);
        }
    }

    #[test]
    fn misses_up_to_budget_lose() {
        let mut round = round("test");
        for letter in ["a", "b", "c", "d", "f"] {
            round.guess(letter).unwrap();
        }
        assert_eq!(round.missed().len(), 5);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.remaining_chances(), 1);

        round.guess("g").unwrap();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining_chances(), 0);
    }

    #[test]
    fn hit_reveals_all_positions() {
        let mut round = round("banana");
        let outcome = round.guess("a").unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Hit {
                letter: 'a',
                revealed: 3
            }
        );
        assert_eq!(round.blanks(), "_a_a_a");
        assert_eq!(round.letters_to_uncover(), 3);
    }

    #[test]
    fn repeated_guess_is_rejected_not_reapplied() {
        let mut round = round("banana");
        round.guess("a").unwrap();
        let blanks = round.blanks();

        assert_eq!(round.guess("a"), Err(GuessError::AlreadyGuessed('a')));
        assert_eq!(round.guess("A"), Err(GuessError::AlreadyGuessed('a')));
        assert_eq!(round.blanks(), blanks);
        assert_eq!(round.correct(), &['a']);
    }

    #[test]
    fn repeated_miss_is_rejected_without_penalty() {
        let mut round = round("banana");
        assert_eq!(round.guess("z").unwrap(), GuessOutcome::Miss { letter: 'z' });
        assert_eq!(round.guess("z"), Err(GuessError::AlreadyGuessed('z')));
        assert_eq!(round.missed(), &['z']);
        assert_eq!(round.remaining_chances(), 5);
    }

    #[test]
    fn invalid_input_leaves_round_unchanged() {
        let mut round = round("owl");
        assert_eq!(round.guess("7"), Err(GuessError::NotALetter('7')));
        assert_eq!(round.guess("ow"), Err(GuessError::NotSingle(2)));
        assert!(round.guessed().is_empty());
    }

    #[test]
    fn guess_after_round_over_is_rejected() {
        let mut round = round("ox");
        round.guess("o").unwrap();
        round.guess("x").unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.guess("a"), Err(GuessError::RoundOver));
    }

    #[test]
    fn small_budget_loses_early() {
        let mut round = Round::with_rules(SecretWord::new("owl").unwrap(), 2, '_');
        round.guess("a").unwrap();
        assert!(!round.is_lost());
        round.guess("b").unwrap();
        assert!(round.is_lost());
    }

    #[test]
    fn guessed_lists_missed_then_correct() {
        let mut round = round("owl");
        round.guess("o").unwrap();
        round.guess("z").unwrap();
        assert_eq!(round.guessed(), vec!['z', 'o']);
        assert!(round.has_guessed('o'));
        assert!(!round.has_guessed('w'));
    }
}
