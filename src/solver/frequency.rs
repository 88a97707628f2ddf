//! Letter frequency counting over candidate words

use crate::core::SecretWord;
use rustc_hash::FxHashMap;

/// English letters from most to least common
pub const ENGLISH_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Count, for each letter, how many candidates contain it
///
/// A letter appearing several times in one word is counted once for that word,
/// since a single guess reveals every occurrence.
#[must_use]
pub fn letter_coverage(candidates: &[&SecretWord]) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for word in candidates {
        let mut seen = [false; 26];
        for letter in word.letters() {
            let idx = (letter as u8 - b'a') as usize;
            if !seen[idx] {
                seen[idx] = true;
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Most widely covered letter not yet guessed
///
/// Ties go to the alphabetically first letter. Returns `None` when no
/// candidate holds an unguessed letter.
#[must_use]
pub fn best_letter(candidates: &[&SecretWord], guessed: &[char]) -> Option<char> {
    letter_coverage(candidates)
        .into_iter()
        .filter(|(letter, _)| !guessed.contains(letter))
        .max_by(|(a_letter, a_count), (b_letter, b_count)| {
            a_count.cmp(b_count).then_with(|| b_letter.cmp(a_letter))
        })
        .map(|(letter, _)| letter)
}

/// First letter in English frequency order not yet guessed
#[must_use]
pub fn fallback_letter(guessed: &[char]) -> Option<char> {
    ENGLISH_ORDER.chars().find(|c| !guessed.contains(c))
}
