//! Make cryptograms: encode text with a random substitution key.
//!
//! The key is applied through the renderer with a mapping whose every entry is
//! a single letter, so case and punctuation are kept exactly as the solver
//! expects to see them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::{letter_at, LOWERCASE_ALPHABET, ALPHABET_SIZE};
use crate::mapping::CandidateMapping;
use crate::render::render;

/// A substitution key: `key[i]` replaces the `i`-th letter of the alphabet.
pub type SubstitutionKey = [char; ALPHABET_SIZE];

/// A uniformly random permutation of the alphabet.
pub fn random_key<R: Rng + ?Sized>(rng: &mut R) -> SubstitutionKey {
    let mut key: SubstitutionKey = ['a'; ALPHABET_SIZE];
    for (slot, letter) in key.iter_mut().zip(LOWERCASE_ALPHABET) {
        *slot = letter;
    }
    key.shuffle(rng);
    key
}

/// Encode `plaintext` with `key`, keeping case and non-letters.
#[must_use]
pub fn encrypt_with_key(plaintext: &str, key: &SubstitutionKey) -> String {
    let mapping = key
        .iter()
        .enumerate()
        .fold(CandidateMapping::new(), |acc, (idx, &cipher)| acc.with_candidate(letter_at(idx), cipher));
    render(plaintext, &mapping)
}

/// Encode `plaintext` with a fresh random key.
pub fn create_cryptogram<R: Rng + ?Sized>(plaintext: &str, rng: &mut R) -> String {
    let key = random_key(rng);
    encrypt_with_key(plaintext, &key)
}
