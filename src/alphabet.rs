use std::fmt;
use std::ops::RangeInclusive;

// Character-set constants
pub const ALPHABET_SIZE: usize = 26;
pub const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Position of `c` in the alphabet (case-insensitive), or `None` for anything
/// that isn't an ASCII letter.
#[must_use]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// The lowercase letter at alphabet position `idx` (`0..26`).
pub(crate) fn letter_at(idx: usize) -> char {
    debug_assert!(idx < ALPHABET_SIZE, "letter index {idx} out of range");
    (b'a' + idx as u8) as char
}

pub trait CipherChar {
    /// True for the characters a substitution cipher rewrites (ASCII letters).
    fn is_cipher_letter(&self) -> bool;
    /// This letter in the case of `model`.
    fn with_case_of(&self, model: char) -> char;
}

impl CipherChar for char {
    fn is_cipher_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
    fn with_case_of(&self, model: char) -> char {
        if model.is_ascii_uppercase() {
            self.to_ascii_uppercase()
        } else {
            self.to_ascii_lowercase()
        }
    }
}

/// A set of lowercase letters, stored as a 26-bit mask.
///
/// Iteration is always alphabetical, which keeps rendering and logging
/// deterministic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);
    pub const FULL: LetterSet = LetterSet((1 << ALPHABET_SIZE) - 1);

    /// The set holding just `c`. Non-letters give the empty set.
    #[must_use]
    pub fn single(c: char) -> Self {
        let mut set = Self::EMPTY;
        set.insert(c);
        set
    }

    #[must_use]
    pub fn contains(self, c: char) -> bool {
        letter_index(c).is_some_and(|idx| self.0 & (1 << idx) != 0)
    }

    pub fn insert(&mut self, c: char) {
        if let Some(idx) = letter_index(c) {
            self.0 |= 1 << idx;
        }
    }

    pub fn remove(&mut self, c: char) {
        if let Some(idx) = letter_index(c) {
            self.0 &= !(1 << idx);
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    /// The only member, if there is exactly one.
    #[must_use]
    pub fn only(self) -> Option<char> {
        if self.len() == 1 {
            Some(letter_at(self.0.trailing_zeros() as usize))
        } else {
            None
        }
    }

    #[must_use]
    pub fn intersection(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 & other.0)
    }

    #[must_use]
    pub fn union(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    #[must_use]
    pub fn difference(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 & !other.0)
    }

    /// Members in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_SIZE)
            .filter(move |&idx| self.0 & (1 << idx) != 0)
            .map(letter_at)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = LetterSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{self}}}")
    }
}
