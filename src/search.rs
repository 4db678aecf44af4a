//! Best-of-many search over hinted solving attempts.
//!
//! # Examples
//!
//! ```
//! use cryptogram::{CryptogramSolver, Dictionary};
//!
//! let solver = CryptogramSolver::new(Dictionary::parse_from_str("the cat"));
//! assert_eq!(solver.find_best_solution("Bqr"), "The");
//! ```
//!
//! Each seed from [`crate::hints::generate`] runs the solver loop to its
//! fixpoint independently; the answers are graded and the best kept. On
//! native targets the attempts run on the rayon thread pool. Ties go to the
//! earlier seed, so the parallel result is the same as a sequential scan.

use std::cmp::Ordering;

use instant::Instant;
use log::{debug, info};
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::hints;
use crate::mapping::CandidateMapping;
use crate::render::render;
use crate::score::{grade, Score};
use crate::solver::run_to_fixpoint;
use crate::template::TemplateIndex;

/// One graded solving attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The rendered answer.
    pub answer: String,
    /// Its grade.
    pub score: Score,
    /// Fixpoint mapping the answer was rendered from.
    pub mapping: CandidateMapping,
    /// Position of the seed that produced it in the seed list.
    pub seed_index: usize,
}

impl Solution {
    /// The better of two attempts; on equal scores the earlier seed wins.
    ///
    /// This is a total order, so folding with it gives the same result in any
    /// grouping.
    #[must_use]
    pub fn better_of(self, other: Solution) -> Solution {
        match self.score.quality_cmp(&other.score) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal if self.seed_index <= other.seed_index => self,
            Ordering::Equal => other,
        }
    }
}

/// A dictionary and its template index, ready to solve cryptograms.
///
/// Built once; every method takes `&self`, so one solver can serve any number
/// of cryptograms (and threads).
#[derive(Debug, Clone)]
pub struct CryptogramSolver {
    dictionary: Dictionary,
    index: TemplateIndex,
}

impl CryptogramSolver {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        let index = TemplateIndex::build(&dictionary);
        Self { dictionary, index }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn template_index(&self) -> &TemplateIndex {
        &self.index
    }

    /// Run the solver loop from `seed` and return the fixpoint mapping.
    #[must_use]
    pub fn solve(&self, cryptogram: &str, seed: &CandidateMapping) -> CandidateMapping {
        run_to_fixpoint(cryptogram, seed, &self.index).mapping
    }

    /// Solve from one seed, then render and grade the result.
    #[must_use]
    pub fn attempt(&self, cryptogram: &str, seed: &CandidateMapping, seed_index: usize) -> Solution {
        let fixpoint = run_to_fixpoint(cryptogram, seed, &self.index);
        let answer = render(cryptogram, &fixpoint.mapping);
        let score = grade(&answer, &self.dictionary);
        debug!(
            "seed {seed_index} [{seed}]: {score} after {} pass(es)",
            fixpoint.passes
        );

        Solution { answer, score, mapping: fixpoint.mapping, seed_index }
    }

    /// Try every seed in `hints` and return the best attempt.
    ///
    /// An empty `hints` list is treated as a single empty seed.
    #[must_use]
    pub fn find_best_solution_with_hints(&self, cryptogram: &str, hints: &[CandidateMapping]) -> Solution {
        let no_hint = [CandidateMapping::new()];
        let hints = if hints.is_empty() { &no_hint[..] } else { hints };

        let started = Instant::now();

        #[cfg(not(target_arch = "wasm32"))]
        let best = hints
            .par_iter()
            .enumerate()
            .map(|(seed_index, seed)| self.attempt(cryptogram, seed, seed_index))
            .reduce_with(Solution::better_of);

        #[cfg(target_arch = "wasm32")]
        let best = hints
            .iter()
            .enumerate()
            .map(|(seed_index, seed)| self.attempt(cryptogram, seed, seed_index))
            .reduce(Solution::better_of);

        // hints is never empty here, so reduce always yields a value
        let best = best.unwrap_or_else(|| self.attempt(cryptogram, &no_hint[0], 0));

        info!(
            "Tried {} seed(s) in {:.3}s; best is seed {} ({})",
            hints.len(),
            started.elapsed().as_secs_f64(),
            best.seed_index,
            best.score
        );
        debug!("best mapping: {}", best.mapping);

        best
    }

    /// Solve `cryptogram` with every generated hint and return the best attempt.
    #[must_use]
    pub fn find_best(&self, cryptogram: &str) -> Solution {
        let seeds = hints::generate(cryptogram);
        self.find_best_solution_with_hints(cryptogram, &seeds)
    }

    /// Solve `cryptogram` and return the best rendered answer.
    #[must_use]
    pub fn find_best_solution(&self, cryptogram: &str) -> String {
        self.find_best(cryptogram).answer
    }
}
