//! Benchmark fitness functions.
//!
//! All functions are maximized. Minimization landscapes are negated so the
//! same tournament and elitism code serves every benchmark.
//!
//! # References
//!
//! - Ackley (1987), *A Connectionist Machine for Genetic Hillclimbing* (OneMax)
//! - Rosenbrock (1960), "An Automatic Method for Finding the Greatest or
//!   Least Value of a Function"
//! - Whitley et al. (1996), "Evaluating Evolutionary Algorithms" (F101)

use super::codec::BitOrder;
use super::types::Genotype;
use std::fmt;
use std::str::FromStr;

/// Width of each decoded integer field in the Rosenbrock landscape.
pub const ROSENBROCK_FIELD_WIDTH: usize = 12;

/// Normalization numerator: sums are scaled by `ROSENBROCK_SCALE / fields`.
pub const ROSENBROCK_SCALE: f64 = 10.0;

/// Width of each decoded integer field in the F101 landscape.
pub const F101_FIELD_WIDTH: usize = 10;

/// Number of `(x1, x2)` pairs F101 decodes.
pub const F101_PAIRS: usize = 5;

/// Multiplier applied to the F101 sum.
pub const F101_SCALE: f64 = 2.0;

/// The fitness function used for a run.
///
/// Chosen once at configuration time; a run never mixes functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitnessFunction {
    /// Number of bits set to 1. Range `[0, len]`.
    OneMax,

    /// Negated, normalized sum of `100·(x1² − x2)² + (1 − x1)²` over
    /// disjoint pairs of 12-bit signed fields. Maximum 0 at `x1 = x2 = 1`.
    Rosenbrock,

    /// Negated, doubled sum of
    /// `−x1·sin(√|x1 − x2 − 47|) − (x2 + 47)·sin(√|x2 + 47 + x1/2|)`
    /// over five pairs of 10-bit signed fields.
    F101,
}

impl FitnessFunction {
    /// Every selectable function.
    pub const ALL: [FitnessFunction; 3] = [
        FitnessFunction::OneMax,
        FitnessFunction::Rosenbrock,
        FitnessFunction::F101,
    ];

    /// Evaluates `genotype` read through `order`. Higher is better.
    ///
    /// Pure: neither the genotype nor the order is modified.
    pub fn evaluate(&self, genotype: &Genotype, order: &BitOrder) -> f64 {
        match self {
            FitnessFunction::OneMax => onemax(genotype, order),
            FitnessFunction::Rosenbrock => rosenbrock(genotype, order),
            FitnessFunction::F101 => f101(genotype, order),
        }
    }

    /// Smallest chromosome length holding every field this function decodes.
    pub fn min_chromosome_length(&self) -> usize {
        match self {
            FitnessFunction::OneMax => 1,
            FitnessFunction::Rosenbrock => 2 * ROSENBROCK_FIELD_WIDTH,
            FitnessFunction::F101 => 2 * F101_PAIRS * F101_FIELD_WIDTH,
        }
    }

    /// Short lowercase name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            FitnessFunction::OneMax => "onemax",
            FitnessFunction::Rosenbrock => "rosenbrock",
            FitnessFunction::F101 => "f101",
        }
    }
}

impl fmt::Display for FitnessFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FitnessFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FitnessFunction::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown fitness function `{s}` (expected onemax, rosenbrock or f101)"))
    }
}

/// Counts logical bits set to 1.
fn onemax(genotype: &Genotype, order: &BitOrder) -> f64 {
    (0..order.len())
        .filter(|&i| order.get_bit(genotype, i))
        .count() as f64
}

fn rosenbrock(genotype: &Genotype, order: &BitOrder) -> f64 {
    let fields = order.len() / ROSENBROCK_FIELD_WIDTH;
    if fields == 0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for pair in 0..fields / 2 {
        let base = 2 * pair * ROSENBROCK_FIELD_WIDTH;
        let x1 = order.decode_signed(genotype, base, ROSENBROCK_FIELD_WIDTH) as f64;
        let x2 = order.decode_signed(genotype, base + ROSENBROCK_FIELD_WIDTH, ROSENBROCK_FIELD_WIDTH)
            as f64;
        sum += 100.0 * (x1 * x1 - x2).powi(2) + (1.0 - x1).powi(2);
    }
    -(sum * ROSENBROCK_SCALE / fields as f64)
}

fn f101(genotype: &Genotype, order: &BitOrder) -> f64 {
    let mut sum = 0.0;
    for pair in 0..F101_PAIRS {
        let base = 2 * pair * F101_FIELD_WIDTH;
        let x1 = order.decode_signed(genotype, base, F101_FIELD_WIDTH) as f64;
        let x2 = order.decode_signed(genotype, base + F101_FIELD_WIDTH, F101_FIELD_WIDTH) as f64;
        sum += -x1 * (x1 - x2 - 47.0).abs().sqrt().sin()
            - (x2 + 47.0) * (x2 + 47.0 + x1 / 2.0).abs().sqrt().sin();
    }
    -(sum * F101_SCALE)
}
