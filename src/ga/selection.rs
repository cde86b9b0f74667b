//! Tournament selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::{Evaluation, Population};
use super::types::Genotype;
use rand::Rng;

/// Tournament selection: draw `size` individuals at random, keep the fittest.
///
/// Candidates are drawn with replacement, so the same index may appear
/// more than once. All comparisons assume **maximization**.
///
/// - size=1: uniform random choice (no pressure)
/// - size=2-3: moderate pressure
/// - size>5: strong pressure (risk of premature convergence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Tournament {
    /// Creates a tournament of `size` candidates (at least 1).
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    /// Candidates drawn per selection.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Picks a parent index among the evaluated individuals.
    ///
    /// A later candidate replaces the incumbent only if strictly fitter,
    /// so ties keep the first one drawn.
    ///
    /// # Panics
    /// Panics if `evaluation` is empty.
    pub fn select_index<R: Rng>(&self, evaluation: &Evaluation, rng: &mut R) -> usize {
        let n = evaluation.len();
        assert!(n > 0, "cannot select from empty population");

        let mut best = rng.random_range(0..n);
        for _ in 1..self.size {
            let candidate = rng.random_range(0..n);
            if evaluation.rating(candidate) > evaluation.rating(best) {
                best = candidate;
            }
        }
        best
    }

    /// Selects a parent and copies its genotype into `out`.
    ///
    /// Returns the selected index.
    pub fn select_into<R: Rng>(
        &self,
        population: &Population,
        evaluation: &Evaluation,
        out: &mut Genotype,
        rng: &mut R,
    ) -> usize {
        let index = self.select_index(evaluation, rng);
        population.copy_out(index, out);
        index
    }
}
