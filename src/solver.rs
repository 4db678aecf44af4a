//! Drive constraint propagation over a whole cryptogram until it stops helping.
//!
//! One pass removes already-resolved plaintext letters from the other cipher
//! letters, then narrows the mapping with every word of the cryptogram in
//! turn. Passes repeat while [`CandidateMapping::size_metric`] keeps shrinking.
//! The metric is a non-negative integer that must strictly decrease for the
//! loop to continue, so the loop always terminates (after at most 26 × 26
//! passes, in practice a handful).

use crate::alphabet::CipherChar;
use crate::mapping::CandidateMapping;
use crate::propagate::narrow;
use crate::template::TemplateIndex;

/// Result of running the solver loop to its fixpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixpoint {
    /// The narrowed mapping.
    pub mapping: CandidateMapping,
    /// Number of passes made, including the final one that changed nothing.
    pub passes: usize,
}

/// The words of a cryptogram as the solver sees them: lowercase, letters only.
///
/// Punctuation inside a word is dropped (`"Don't"` -> `"dont"`); tokens with
/// no letters at all disappear. The cryptogram itself is left untouched for
/// rendering.
#[must_use]
pub fn cipher_words(cryptogram: &str) -> Vec<String> {
    cryptogram
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(CipherChar::is_cipher_letter)
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// One full pass: eliminate resolved letters, then narrow with every word.
fn propagation_pass(words: &[String], mapping: &CandidateMapping, index: &TemplateIndex) -> CandidateMapping {
    words
        .iter()
        .fold(mapping.eliminate_known_singles(), |acc, word| narrow(word, &acc, index))
        .prune_full_sets()
}

/// Narrow `seed` against every word of `cryptogram` until a pass stops
/// shrinking the mapping.
#[must_use]
pub fn run_to_fixpoint(cryptogram: &str, seed: &CandidateMapping, index: &TemplateIndex) -> Fixpoint {
    let words = cipher_words(cryptogram);
    if words.is_empty() {
        return Fixpoint { mapping: *seed, passes: 0 };
    }

    let mut mapping = *seed;
    let mut size = mapping.size_metric();
    let mut passes = 0;

    loop {
        mapping = propagation_pass(&words, &mapping, index);
        passes += 1;

        let new_size = mapping.size_metric();
        log::trace!("pass {passes}: size {size} -> {new_size}");
        if new_size >= size {
            break;
        }
        size = new_size;
    }

    Fixpoint { mapping, passes }
}

/// Solve `cryptogram` from `seed`, returning the fixpoint mapping.
#[must_use]
pub fn solve(cryptogram: &str, seed: &CandidateMapping, index: &TemplateIndex) -> CandidateMapping {
    run_to_fixpoint(cryptogram, seed, index).mapping
}
