//! Variation operators for binary genotypes.
//!
//! Operators always act on scratch copies drawn out of the population,
//! never on population storage.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: exchange the physical prefix `[0, point)`
//!   of two genotypes, `point` uniform in `[0, len - 2]`
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: invert one logical bit chosen uniformly
//!
//! Crossover ignores the bit order: it cuts storage, so a
//! shuffled order changes which logical bits travel together.

use super::codec::BitOrder;
use super::types::Genotype;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover producing offspring in place of the parents.
///
/// Returns the cut point. Genotypes shorter than 2 bits are left unchanged.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(a: &mut Genotype, b: &mut Genotype, rng: &mut R) -> usize {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let point = rng.random_range(0..=a.len().saturating_sub(2));
    crossover_at(a, b, point);
    point
}

/// Exchanges physical positions `[0, point)` between `a` and `b`.
///
/// Applying it twice with the same `point` restores both genotypes.
///
/// # Panics
/// Panics if the lengths differ or `point > len`.
pub fn crossover_at(a: &mut Genotype, b: &mut Genotype, point: usize) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    a.as_bits_mut()[..point].swap_with_slice(&mut b.as_bits_mut()[..point]);
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips one uniformly chosen logical bit. Returns its logical index.
///
/// Zero-length genotypes are left unchanged and 0 is returned.
pub fn bit_flip_mutation<R: Rng>(genotype: &mut Genotype, order: &BitOrder, rng: &mut R) -> usize {
    if order.is_empty() {
        return 0;
    }
    let bit = rng.random_range(0..order.len());
    flip_at(genotype, order, bit);
    bit
}

/// Flips logical bit `logical` through `order`.
pub fn flip_at(genotype: &mut Genotype, order: &BitOrder, logical: usize) {
    order.flip_bit(genotype, logical);
}

// ============================================================================
// Tests
// ============================================================================
