//! Genotype storage.
//!
//! A [`Genotype`] owns its bits in physical (storage) order. Logical access
//! used by fitness evaluation and mutation goes through
//! [`BitOrder`](super::codec::BitOrder); crossover works on physical
//! positions directly.

use rand::Rng;

/// A fixed-length bit string representing one candidate solution.
///
/// Genotypes are never shared between generations: selection copies one
/// out of the population and insertion copies it back in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genotype {
    bits: Vec<bool>,
}

impl Genotype {
    /// Creates an all-zero genotype of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Creates an all-one genotype of `len` bits.
    pub fn ones(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    /// Wraps an existing bit vector (physical order).
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a genotype with every physical bit drawn uniformly.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut g = Self::zeros(len);
        g.randomize(rng);
        g
    }

    /// Overwrites every physical bit with a uniform random value.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for bit in &mut self.bits {
            *bit = rng.random_bool(0.5);
        }
    }

    /// Chromosome length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` for a zero-length genotype.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Physical bit at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    #[inline]
    pub fn physical(&self, pos: usize) -> bool {
        self.bits[pos]
    }

    /// Writes the physical bit at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    #[inline]
    pub fn set_physical(&mut self, pos: usize, value: bool) {
        self.bits[pos] = value;
    }

    /// Number of bits set to 1. Independent of any bit ordering.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Physical bits as a slice.
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    pub(crate) fn as_bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}
