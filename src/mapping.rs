//! Candidate mappings and the set algebra the solver is built from.
//!
//! A [`CandidateMapping`] records, for each ciphertext letter, which plaintext
//! letters it may still decrypt to. A letter with no entry is unconstrained:
//! every one of the 26 letters is still possible. All reads go through
//! [`CandidateMapping::candidates_for`], which applies that convention.
//!
//! Every operation returns a new mapping, so each step of the solver is a pure
//! function of its inputs and solving attempts never share mutable state.

use std::fmt;

use crate::alphabet::{letter_at, letter_index, LetterSet, ALPHABET_SIZE};

/// Ciphertext letter -> still-possible plaintext letters.
///
/// Invariant: a stored set is never empty. Full sets may appear transiently
/// (e.g. after a union) and are removed by [`CandidateMapping::prune_full_sets`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateMapping {
    slots: [Option<LetterSet>; ALPHABET_SIZE],
}

impl CandidateMapping {
    /// The mapping with no constraints at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding a single hypothesis `cipher -> plain`.
    #[must_use]
    pub fn hint(cipher: char, plain: char) -> Self {
        Self::new().with_candidate(cipher, plain)
    }

    /// This mapping with `plain` added to the explicit candidates of `cipher`.
    ///
    /// Used to accumulate the letters observed for a cipher letter, so an
    /// absent entry starts from the empty set here, not the full alphabet.
    #[must_use]
    pub fn with_candidate(mut self, cipher: char, plain: char) -> Self {
        if let (Some(idx), Some(_)) = (letter_index(cipher), letter_index(plain)) {
            let mut set = self.slots[idx].unwrap_or(LetterSet::EMPTY);
            set.insert(plain);
            self.slots[idx] = Some(set);
        }
        self
    }

    /// Still-possible plaintext letters for `cipher` (full alphabet if unconstrained).
    #[must_use]
    pub fn candidates_for(&self, cipher: char) -> LetterSet {
        self.get(cipher).unwrap_or(LetterSet::FULL)
    }

    /// The explicit entry for `cipher`, if any.
    #[must_use]
    pub fn get(&self, cipher: char) -> Option<LetterSet> {
        letter_index(cipher).and_then(|idx| self.slots[idx])
    }

    /// Replace the entry for `cipher`. An empty set removes the entry.
    pub fn set(&mut self, cipher: char, candidates: LetterSet) {
        if let Some(idx) = letter_index(cipher) {
            self.slots[idx] = (!candidates.is_empty()).then_some(candidates);
        }
    }

    /// Explicit entries in cipher-letter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterSet)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|set| (letter_at(idx), set)))
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Both constraints at once: per letter, `self ∩ other` (absent = full).
    ///
    /// A letter whose two sets are disjoint has no consistent value; its entry
    /// is dropped rather than stored empty.
    #[must_use]
    pub fn intersect(&self, other: &CandidateMapping) -> CandidateMapping {
        let mut slots = [None; ALPHABET_SIZE];
        for (idx, slot) in slots.iter_mut().enumerate() {
            *slot = match (self.slots[idx], other.slots[idx]) {
                (Some(a), Some(b)) => Some(a.intersection(b)).filter(|set| !set.is_empty()),
                (a, b) => a.or(b),
            };
        }
        CandidateMapping { slots }
    }

    /// Either alternative: per letter, `self ∪ other`.
    ///
    /// A letter constrained on only one side keeps that side's set, which makes
    /// the empty mapping the identity when folding alternatives together.
    #[must_use]
    pub fn union(&self, other: &CandidateMapping) -> CandidateMapping {
        let mut slots = [None; ALPHABET_SIZE];
        for (idx, slot) in slots.iter_mut().enumerate() {
            *slot = match (self.slots[idx], other.slots[idx]) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (a, b) => a.or(b),
            };
        }
        CandidateMapping { slots }
    }

    /// Drop entries that allow the whole alphabet (they carry no information).
    #[must_use]
    pub fn prune_full_sets(&self) -> CandidateMapping {
        let mut pruned = *self;
        for slot in &mut pruned.slots {
            if slot.is_some_and(LetterSet::is_full) {
                *slot = None;
            }
        }
        pruned
    }

    /// Remove every resolved plaintext letter from the other cipher letters.
    ///
    /// The cipher is a bijection, so once `x` certainly decrypts to `e`, no
    /// other letter can. Letters are visited in alphabet order and a letter
    /// reduced to a singleton claims its plaintext letter at once, so one call
    /// cascades until nothing changes. Singletons present on entry are kept as
    /// they are, and a set that would be emptied is left untouched.
    #[must_use]
    pub fn eliminate_known_singles(&self) -> CandidateMapping {
        let mut result = *self;
        let mut claimed = self
            .slots
            .iter()
            .flatten()
            .filter(|set| set.len() == 1)
            .fold(LetterSet::EMPTY, |acc, set| acc.union(*set));

        let mut changed = true;
        while changed {
            changed = false;
            for slot in result.slots.iter_mut() {
                let Some(set) = *slot else { continue };
                if set.len() == 1 {
                    continue;
                }
                let remaining = set.difference(claimed);
                if remaining.is_empty() || remaining == set {
                    continue;
                }
                *slot = Some(remaining);
                changed = true;
                if remaining.len() == 1 {
                    claimed = claimed.union(remaining);
                }
            }
        }
        result
    }

    /// Sum of candidate counts over all 26 cipher letters (26 per unconstrained
    /// letter). Smaller means closer to a unique answer.
    #[must_use]
    pub fn size_metric(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| slot.map_or(ALPHABET_SIZE, LetterSet::len))
            .sum()
    }
}

/// Compact one-line form, e.g. `B:ct, Q:ah, R:et`.
impl fmt::Display for CandidateMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (cipher, set)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{set}", cipher.to_ascii_uppercase())?;
        }
        Ok(())
    }
}

impl fmt::Debug for CandidateMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateMapping({self})")
    }
}
