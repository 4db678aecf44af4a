//! Narrow a candidate mapping using one ciphertext word.
//!
//! A ciphertext word can only decrypt to a dictionary word with the same
//! template. Each such word that agrees with the current mapping is one
//! possible reading; the word's constraint is the union over those readings,
//! and it is intersected into the running mapping.

use crate::mapping::CandidateMapping;
use crate::template::{canonicalize, TemplateIndex};

/// The pairs `cipher -> plain` that reading `cipher_word` as `plain_word`
/// implies, or `None` if `mapping` already forbids one of them.
///
/// Both words must have the same length (guaranteed when they share a template).
#[must_use]
pub fn reading_constraint(cipher_word: &str, plain_word: &str, mapping: &CandidateMapping) -> Option<CandidateMapping> {
    debug_assert_eq!(
        cipher_word.len(), plain_word.len(),
        "'{cipher_word}' and '{plain_word}' must have the same length"
    );

    cipher_word
        .chars()
        .zip(plain_word.chars())
        .try_fold(CandidateMapping::new(), |acc, (cipher, plain)| {
            mapping
                .candidates_for(cipher)
                .contains(plain)
                .then(|| acc.with_candidate(cipher, plain))
        })
}

/// Narrow `mapping` with everything `cipher_word` can tell us.
///
/// Words whose template matches nothing in the dictionary (names, typos,
/// rare words) carry no information and leave the mapping unchanged. The
/// same holds when every template match contradicts the mapping.
#[must_use]
pub fn narrow(cipher_word: &str, mapping: &CandidateMapping, index: &TemplateIndex) -> CandidateMapping {
    let cipher_word = cipher_word.to_ascii_lowercase();
    let matches = index.lookup(&canonicalize(&cipher_word));
    if matches.is_empty() {
        log::trace!("no dictionary word shares the template of '{cipher_word}'");
        return *mapping;
    }

    let word_constraint = matches
        .iter()
        .filter_map(|plain_word| reading_constraint(&cipher_word, plain_word, mapping))
        .fold(CandidateMapping::new(), |acc, reading| acc.union(&reading));

    mapping.intersect(&word_constraint)
}
