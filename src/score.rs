//! Grade rendered answers.
//!
//! A [`Score`] has two parts: how much ambiguity is left in the answer, and how
//! many of its words are real dictionary words. More words wins; with equal
//! words, less ambiguity wins.

use std::cmp::Ordering;
use std::fmt;

use crate::alphabet::ALPHABET_SIZE;
use crate::dictionary::Dictionary;

/// Marker for a letter with no constraint at all, worth the whole alphabet.
pub const UNCONSTRAINED_MARKER: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    /// Sum of remaining candidate counts over every unresolved letter.
    pub ambiguity: usize,
    /// Number of words of the answer found in the dictionary.
    pub recognized_words: usize,
}

impl Score {
    #[must_use]
    pub fn new(ambiguity: usize, recognized_words: usize) -> Self {
        Self { ambiguity, recognized_words }
    }

    /// True iff `self` is strictly better than `other`. Equal scores are not.
    #[must_use]
    pub fn is_better(&self, other: &Score) -> bool {
        self.quality_cmp(other) == Ordering::Greater
    }

    /// Order by quality: more recognized words first, then less ambiguity.
    #[must_use]
    pub fn quality_cmp(&self, other: &Score) -> Ordering {
        self.recognized_words
            .cmp(&other.recognized_words)
            .then_with(|| other.ambiguity.cmp(&self.ambiguity))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words, ambiguity {}", self.recognized_words, self.ambiguity)
    }
}

/// Ambiguity left in a rendered answer.
///
/// Inside brackets a run of digits is an explicit count and every other
/// character counts once; outside brackets only the `*` marker counts (as 26).
/// Digit runs come from the text itself as well as from the renderer, so the
/// arithmetic saturates instead of overflowing.
#[must_use]
pub fn ambiguity(rendered: &str) -> usize {
    let mut total: usize = 0;
    // Some(count so far) while inside brackets
    let mut bracket: Option<usize> = None;
    let mut number: usize = 0;

    for c in rendered.chars() {
        match (bracket, c) {
            (None, UNCONSTRAINED_MARKER) => total = total.saturating_add(ALPHABET_SIZE),
            (None, '[') => {
                bracket = Some(0);
                number = 0;
            }
            (None, _) => {}
            (Some(count), ']') => {
                total = total.saturating_add(count.saturating_add(number));
                bracket = None;
            }
            (Some(_), _) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).map_or(0, |d| d as usize);
                number = number.saturating_mul(10).saturating_add(digit);
            }
            (Some(count), _) => {
                bracket = Some(count.saturating_add(1));
            }
        }
    }

    total
}

/// Number of words in `rendered` that the dictionary recognizes.
///
/// ASCII punctuation (brackets included) is stripped before splitting on
/// whitespace, so `"It's"` is looked up as `"its"`.
#[must_use]
pub fn recognized_words(rendered: &str, dictionary: &Dictionary) -> usize {
    let stripped: String = rendered.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    stripped
        .split_whitespace()
        .filter(|word| dictionary.contains(word))
        .count()
}

/// Grade a rendered answer.
#[must_use]
pub fn grade(rendered: &str, dictionary: &Dictionary) -> Score {
    Score {
        ambiguity: ambiguity(rendered),
        recognized_words: recognized_words(rendered, dictionary),
    }
}
