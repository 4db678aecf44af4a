//! Seed mappings for the search, from letter frequencies and English priors.
//!
//! Propagation alone can stall with many letters still open. Starting it from
//! a small guess ("the most common cipher letter is `e`") often lets it
//! finish, so the search tries one solve per guess and keeps the best answer.
//!
//! The seeds, in order:
//! 1. no hint at all;
//! 2. each of the most frequent cipher letters as each of [`COMMON_LETTERS`];
//! 3. each of the most frequent in-word letter pairs as each of
//!    [`COMMON_PAIRS`] (or [`COMMON_DOUBLES`] for doubled letters);
//! 4. each one-letter cipher word as `a` and as `i`.
//!
//! Frequency ties are broken by first appearance, so the list is a pure,
//! deterministic function of the cryptogram.

use std::collections::HashMap;

use crate::alphabet::CipherChar;
use crate::mapping::CandidateMapping;

pub const COMMON_LETTERS: [char; 5] = ['e', 't', 'a', 'o', 'n'];
pub const COMMON_PAIRS: [&str; 5] = ["th", "he", "an", "re", "er"];
pub const COMMON_DOUBLES: [&str; 5] = ["ll", "ee", "ss", "oo", "tt"];
pub const ONE_LETTER_WORDS: [char; 2] = ['a', 'i'];

/// How many frequent letters and pairs are tried.
pub const DEFAULT_HINT_COUNT: usize = 5;

/// Count items, remembering first-appearance order, and return them sorted by
/// count (highest first; ties keep first-appearance order).
fn ranked_by_frequency<T: Eq + std::hash::Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        match positions.get(&item) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `count` most used letters of `cryptogram` (lowercase), most used first.
#[must_use]
pub fn most_used_letters(cryptogram: &str, count: usize) -> Vec<char> {
    let letters = cryptogram
        .chars()
        .filter(CipherChar::is_cipher_letter)
        .map(|c| c.to_ascii_lowercase());

    ranked_by_frequency(letters)
        .into_iter()
        .take(count)
        .map(|(letter, _)| letter)
        .collect()
}

/// Every pair of adjacent letters inside a word, duplicates included.
#[must_use]
pub fn letter_pairs(cryptogram: &str) -> Vec<(char, char)> {
    cryptogram
        .split_whitespace()
        .flat_map(|token| {
            let chars: Vec<char> = token.chars().map(|c| c.to_ascii_lowercase()).collect();
            chars
                .windows(2)
                .filter(|pair| pair[0].is_cipher_letter() && pair[1].is_cipher_letter())
                .map(|pair| (pair[0], pair[1]))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// The `count` most common letter pairs, most common first. Doubled letters
/// are always included, even past `count`.
#[must_use]
pub fn most_common_letter_pairs(cryptogram: &str, count: usize) -> Vec<(char, char)> {
    ranked_by_frequency(letter_pairs(cryptogram))
        .into_iter()
        .enumerate()
        .filter(|(rank, ((first, second), _))| *rank < count || first == second)
        .map(|(_, (pair, _))| pair)
        .collect()
}

/// Cipher words made of a single letter (ignoring punctuation), in order of
/// first appearance.
#[must_use]
pub fn one_letter_words(cryptogram: &str) -> Vec<char> {
    let mut found = Vec::new();
    for token in cryptogram.split_whitespace() {
        let mut letters = token.chars().filter(CipherChar::is_cipher_letter);
        if let (Some(letter), None) = (letters.next(), letters.next()) {
            let letter = letter.to_ascii_lowercase();
            if !found.contains(&letter) {
                found.push(letter);
            }
        }
    }
    found
}

/// Seeds from the most used cipher letters.
fn letter_frequency_hints(cryptogram: &str) -> impl Iterator<Item = CandidateMapping> {
    most_used_letters(cryptogram, DEFAULT_HINT_COUNT)
        .into_iter()
        .flat_map(|cipher| COMMON_LETTERS.into_iter().map(move |plain| CandidateMapping::hint(cipher, plain)))
}

/// Seeds from the most common letter pairs.
fn letter_pair_hints(cryptogram: &str) -> impl Iterator<Item = CandidateMapping> {
    most_common_letter_pairs(cryptogram, DEFAULT_HINT_COUNT)
        .into_iter()
        .flat_map(|(first, second)| {
            let english = if first == second { COMMON_DOUBLES } else { COMMON_PAIRS };
            english.into_iter().filter_map(move |pair| {
                let mut plain = pair.chars();
                let (p1, p2) = (plain.next()?, plain.next()?);
                Some(CandidateMapping::hint(first, p1).with_candidate(second, p2))
            })
        })
}

/// Seeds from one-letter words.
fn one_letter_word_hints(cryptogram: &str) -> impl Iterator<Item = CandidateMapping> {
    one_letter_words(cryptogram)
        .into_iter()
        .flat_map(|cipher| ONE_LETTER_WORDS.into_iter().map(move |plain| CandidateMapping::hint(cipher, plain)))
}

/// Every seed mapping for `cryptogram`, starting with the empty mapping.
#[must_use]
pub fn generate(cryptogram: &str) -> Vec<CandidateMapping> {
    std::iter::once(CandidateMapping::new())
        .chain(letter_frequency_hints(cryptogram))
        .chain(letter_pair_hints(cryptogram))
        .chain(one_letter_word_hints(cryptogram))
        .collect()
}
