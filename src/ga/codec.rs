//! Logical bit addressing and signed integer decoding.
//!
//! A [`BitOrder`] is a permutation of `[0, len)` fixed for the whole run.
//! Logical index `i` lives at physical position `order[i]`. Fitness
//! functions and mutation address genotypes logically, so shuffling the
//! order changes which bits sit next to each other in storage (and thus
//! which bits single-point crossover keeps together) without changing
//! what any genotype means.

use super::error::Result;
use super::types::Genotype;
use rand::Rng;

/// Widest field [`BitOrder::decode_signed`] accepts.
pub const MAX_DECODE_WIDTH: usize = 63;

/// Fixed logical-to-physical bit index permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitOrder {
    order: Vec<usize>,
}

impl BitOrder {
    /// The identity mapping on `len` bits.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    /// Identity followed by `len` swaps of uniformly drawn positions.
    pub fn shuffled<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut order = Self::identity(len);
        order.shuffle(rng);
        order
    }

    /// Identity mapping with storage reserved fallibly.
    pub(crate) fn try_new<R: Rng>(len: usize, shuffle: bool, rng: &mut R) -> Result<Self> {
        let mut order = Vec::new();
        order.try_reserve_exact(len)?;
        order.extend(0..len);
        let mut map = Self { order };
        if shuffle {
            map.shuffle(rng);
        }
        Ok(map)
    }

    fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let n = self.order.len();
        if n < 2 {
            return;
        }
        for _ in 0..n {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            self.order.swap(i, j);
        }
    }

    /// Builds a mapping from an explicit permutation.
    ///
    /// Returns `None` unless `order` is a bijection on `[0, order.len())`.
    pub fn from_permutation(order: Vec<usize>) -> Option<Self> {
        let map = Self { order };
        map.is_bijection().then_some(map)
    }

    /// Number of addressable bits.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for a zero-length mapping.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` when every physical position appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let n = self.order.len();
        let mut seen = vec![false; n];
        for &p in &self.order {
            if p >= n || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }

    /// Physical position of logical index `logical`.
    ///
    /// # Panics
    /// Panics if `logical >= len()`.
    #[inline]
    pub fn physical(&self, logical: usize) -> usize {
        assert!(
            logical < self.order.len(),
            "logical bit index {logical} out of range for length {}",
            self.order.len()
        );
        self.order[logical]
    }

    /// Reads logical bit `logical` of `genotype`.
    ///
    /// # Panics
    /// Panics if `logical >= len()`.
    #[inline]
    pub fn get_bit(&self, genotype: &Genotype, logical: usize) -> bool {
        genotype.physical(self.physical(logical))
    }

    /// Writes logical bit `logical` of `genotype`.
    ///
    /// # Panics
    /// Panics if `logical >= len()`.
    #[inline]
    pub fn set_bit(&self, genotype: &mut Genotype, logical: usize, value: bool) {
        genotype.set_physical(self.physical(logical), value);
    }

    /// Inverts logical bit `logical` of `genotype`.
    pub fn flip_bit(&self, genotype: &mut Genotype, logical: usize) {
        let value = self.get_bit(genotype, logical);
        self.set_bit(genotype, logical, !value);
    }

    /// Decodes `width` logical bits starting at `base` as a two's-complement
    /// integer, most significant bit first.
    ///
    /// # Panics
    /// Panics if `width` is 0 or exceeds [`MAX_DECODE_WIDTH`], or if the
    /// field runs past the end of the chromosome.
    pub fn decode_signed(&self, genotype: &Genotype, base: usize, width: usize) -> i64 {
        assert!(
            (1..=MAX_DECODE_WIDTH).contains(&width),
            "decode width {width} outside 1..={MAX_DECODE_WIDTH}"
        );
        let mut raw: u64 = 0;
        for i in base..base + width {
            raw = raw * 2 + u64::from(self.get_bit(genotype, i));
        }
        twos_complement(raw, width)
    }
}

/// Reinterprets the low `width` bits of `raw` as a two's-complement value.
///
/// Values at or above `2^(width-1)` map to `raw - 2^width`.
pub fn twos_complement(raw: u64, width: usize) -> i64 {
    debug_assert!((1..=MAX_DECODE_WIDTH).contains(&width));
    let shift = 64 - width as u32;
    ((raw << shift) as i64) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    /// Writes `value` into `width` logical bits at `base`, MSB first.
    fn encode_signed(order: &BitOrder, g: &mut Genotype, base: usize, width: usize, value: i64) {
        let raw = (value as u64) & ((1u64 << width) - 1);
        for k in 0..width {
            let bit = (raw >> (width - 1 - k)) & 1 == 1;
            order.set_bit(g, base + k, bit);
        }
    }

    #[test]
    fn test_identity_is_bijection() {
        assert!(BitOrder::identity(100).is_bijection());
        assert_eq!(BitOrder::identity(5).physical(3), 3);
    }

    #[test]
    fn test_shuffled_is_bijection() {
        let mut rng = create_rng(42);
        for len in [1, 2, 3, 17, 100] {
            let order = BitOrder::shuffled(len, &mut rng);
            assert_eq!(order.len(), len);
            assert!(order.is_bijection(), "not a bijection: {order:?}");
        }
    }

    #[test]
    fn test_shuffled_moves_something() {
        let mut rng = create_rng(7);
        let order = BitOrder::shuffled(100, &mut rng);
        assert_ne!(order, BitOrder::identity(100));
    }

    #[test]
    fn test_from_permutation_rejects_duplicates() {
        assert!(BitOrder::from_permutation(vec![0, 0, 1]).is_none());
        assert!(BitOrder::from_permutation(vec![0, 3, 1]).is_none());
        assert!(BitOrder::from_permutation(vec![2, 0, 1]).is_some());
    }

    #[test]
    fn test_get_bit_goes_through_permutation() {
        let order = BitOrder::from_permutation(vec![2, 0, 1]).unwrap();
        let g = Genotype::from_bits(vec![false, false, true]);
        assert!(order.get_bit(&g, 0));
        assert!(!order.get_bit(&g, 1));
        assert!(!order.get_bit(&g, 2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_bit_out_of_range_panics() {
        let order = BitOrder::identity(4);
        let g = Genotype::zeros(4);
        order.get_bit(&g, 4);
    }

    #[test]
    fn test_decode_known_values() {
        let order = BitOrder::identity(12);
        assert_eq!(order.decode_signed(&Genotype::zeros(12), 0, 12), 0);
        assert_eq!(order.decode_signed(&Genotype::ones(12), 0, 12), -1);

        // 0111_1111_1111 = 2047, 1000_0000_0000 = -2048
        let mut g = Genotype::ones(12);
        order.set_bit(&mut g, 0, false);
        assert_eq!(order.decode_signed(&g, 0, 12), 2047);
        let mut g = Genotype::zeros(12);
        order.set_bit(&mut g, 0, true);
        assert_eq!(order.decode_signed(&g, 0, 12), -2048);
    }

    #[test]
    fn test_decode_width_one() {
        let order = BitOrder::identity(1);
        assert_eq!(order.decode_signed(&Genotype::zeros(1), 0, 1), 0);
        assert_eq!(order.decode_signed(&Genotype::ones(1), 0, 1), -1);
    }

    #[test]
    fn test_twos_complement_boundaries() {
        assert_eq!(twos_complement(511, 10), 511);
        assert_eq!(twos_complement(512, 10), -512);
        assert_eq!(twos_complement(1023, 10), -1);
        assert_eq!(twos_complement(2047, 12), 2047);
        assert_eq!(twos_complement(2048, 12), -2048);
        assert_eq!(twos_complement(1 << 62, 63), -(1i64 << 62));
        assert_eq!(twos_complement((1 << 63) - 1, 63), -1);
        assert_eq!(twos_complement((1 << 62) - 1, 63), (1i64 << 62) - 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_decode_past_end_panics() {
        let order = BitOrder::identity(10);
        order.decode_signed(&Genotype::zeros(10), 5, 6);
    }

    proptest! {
        #[test]
        fn prop_set_then_get(
            bits in proptest::collection::vec(any::<bool>(), 1..128),
            seed in any::<u64>(),
            idx in any::<prop::sample::Index>(),
            value in any::<bool>(),
        ) {
            let len = bits.len();
            let mut rng = create_rng(seed);
            let order = BitOrder::shuffled(len, &mut rng);
            let original = Genotype::from_bits(bits);
            let mut g = original.clone();
            let i = idx.index(len);

            order.set_bit(&mut g, i, value);

            prop_assert_eq!(order.get_bit(&g, i), value);
            for j in (0..len).filter(|&j| j != i) {
                prop_assert_eq!(order.get_bit(&g, j), order.get_bit(&original, j));
            }
        }

        #[test]
        fn prop_decode_round_trip(
            width in 1usize..=MAX_DECODE_WIDTH,
            seed in any::<u64>(),
            offset in any::<u64>(),
        ) {
            let lo = -(1i64 << (width - 1));
            let value = lo + (offset % (1u64 << width)) as i64;

            let mut rng = create_rng(seed);
            let len = width + 8;
            let order = BitOrder::shuffled(len, &mut rng);
            let mut g = Genotype::random(len, &mut rng);
            encode_signed(&order, &mut g, 4, width, value);

            prop_assert_eq!(order.decode_signed(&g, 4, width), value);
        }
    }

    #[test]
    fn test_decode_widest_field() {
        let width = MAX_DECODE_WIDTH;
        let order = BitOrder::identity(width);
        assert_eq!(order.decode_signed(&Genotype::ones(width), 0, width), -1);
        assert_eq!(order.decode_signed(&Genotype::zeros(width), 0, width), 0);

        for value in [-(1i64 << 62), -1, 0, 1, (1i64 << 62) - 1] {
            let mut g = Genotype::zeros(width);
            encode_signed(&order, &mut g, 0, width, value);
            assert_eq!(order.decode_signed(&g, 0, width), value, "value {value}");
        }
    }

    #[test]
    fn test_decode_round_trip_exhaustive_small_widths() {
        for width in 1..=10usize {
            let order = BitOrder::identity(width);
            let lo = -(1i64 << (width - 1));
            let hi = (1i64 << (width - 1)) - 1;
            for value in lo..=hi {
                let mut g = Genotype::zeros(width);
                encode_signed(&order, &mut g, 0, width, value);
                assert_eq!(order.decode_signed(&g, 0, width), value);
            }
        }
    }
}
