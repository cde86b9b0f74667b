//! Population storage and evaluation.
//!
//! A [`Population`] is an arena of genotypes addressed by index. The runner
//! keeps two of them (current and next) and swaps their roles every
//! generation. [`Evaluation`] is the fitness table plus elite ranking for
//! one population; it is rebuilt from scratch after every swap.

use super::codec::BitOrder;
use super::error::Result;
use super::fitness::FitnessFunction;
use super::types::Genotype;
use rand::Rng;

/// Fixed-capacity collection of equal-length genotypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Genotype>,
    chromosome_length: usize,
}

impl Population {
    /// Reserves `capacity` all-zero genotypes of `chromosome_length` bits.
    ///
    /// Storage is reserved fallibly; running out of memory yields
    /// [`GaError::Allocation`](super::GaError::Allocation).
    pub fn allocate(capacity: usize, chromosome_length: usize) -> Result<Self> {
        let mut members = Vec::new();
        members.try_reserve_exact(capacity)?;
        for _ in 0..capacity {
            let mut bits = Vec::new();
            bits.try_reserve_exact(chromosome_length)?;
            bits.resize(chromosome_length, false);
            members.push(Genotype::from_bits(bits));
        }
        Ok(Self {
            members,
            chromosome_length,
        })
    }

    /// Builds a population from existing genotypes.
    ///
    /// # Panics
    /// Panics if the genotypes differ in length.
    pub fn from_genotypes(members: Vec<Genotype>) -> Self {
        let chromosome_length = members.first().map_or(0, Genotype::len);
        assert!(
            members.iter().all(|g| g.len() == chromosome_length),
            "all genotypes must have the same length"
        );
        Self {
            members,
            chromosome_length,
        }
    }

    /// Fills every physical bit of every slot uniformly at random.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for g in &mut self.members {
            g.randomize(rng);
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.members.len()
    }

    /// Bits per genotype.
    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    /// Borrows the genotype in slot `index`.
    pub fn get(&self, index: usize) -> &Genotype {
        &self.members[index]
    }

    /// Copies slot `index` into `out`, reusing `out`'s storage.
    pub fn copy_out(&self, index: usize, out: &mut Genotype) {
        out.clone_from(&self.members[index]);
    }

    /// Copies `genotype` into slot `position`.
    ///
    /// # Panics
    /// Panics if `position` is out of range or the length differs.
    pub fn insert(&mut self, genotype: &Genotype, position: usize) {
        assert_eq!(
            genotype.len(),
            self.chromosome_length,
            "genotype length does not match population"
        );
        self.members[position].clone_from(genotype);
    }

    /// Iterates over all slots.
    pub fn iter(&self) -> impl Iterator<Item = &Genotype> {
        self.members.iter()
    }
}

/// Fitness table and elite ranking for one population.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    ratings: Vec<f64>,
    ranking: Vec<usize>,
    elitism_size: usize,
}

impl Evaluation {
    /// Evaluates the first `population_size` slots of `population`.
    ///
    /// Ranking keeps the `max(elitism_size, 1)` best indices in descending
    /// fitness order. A newcomer only moves ahead of strictly worse entries,
    /// so among equal scores the lower index ranks first.
    ///
    /// # Panics
    /// Panics if `population_size` is 0 or exceeds the population capacity.
    pub fn evaluate_population(
        population: &Population,
        population_size: usize,
        fitness: FitnessFunction,
        order: &BitOrder,
        elitism_size: usize,
    ) -> Self {
        assert!(population_size > 0, "cannot evaluate an empty population");
        assert!(
            population_size <= population.capacity(),
            "population_size {population_size} exceeds capacity {}",
            population.capacity()
        );

        let slots = elitism_size.max(1);
        let mut ratings = Vec::with_capacity(population_size);
        let mut ranking: Vec<usize> = Vec::with_capacity(slots + 1);

        for index in 0..population_size {
            let score = fitness.evaluate(population.get(index), order);
            ratings.push(score);
            let pos = ranking
                .iter()
                .position(|&r| score > ratings[r])
                .unwrap_or(ranking.len());
            if pos < slots {
                ranking.insert(pos, index);
                ranking.truncate(slots);
            }
        }

        Self {
            ratings,
            ranking,
            elitism_size,
        }
    }

    /// Fitness of every evaluated individual, by index.
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    /// Fitness of individual `index`.
    pub fn rating(&self, index: usize) -> f64 {
        self.ratings[index]
    }

    /// Exactly `elitism_size` indices, best first.
    pub fn elite(&self) -> &[usize] {
        &self.ranking[..self.elitism_size.min(self.ranking.len())]
    }

    /// Index of the best individual (earliest on ties).
    pub fn best(&self) -> usize {
        self.ranking[0]
    }

    /// Fitness of the best individual.
    pub fn best_fitness(&self) -> f64 {
        self.ratings[self.best()]
    }

    /// Number of evaluated individuals.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Always `false`: an evaluation covers at least one individual.
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    /// Genotype with the first `ones` bits set.
    fn with_ones(len: usize, ones: usize) -> Genotype {
        Genotype::from_bits((0..len).map(|i| i < ones).collect())
    }

    fn onemax_eval(pop: &Population, elitism: usize) -> Evaluation {
        let order = BitOrder::identity(pop.chromosome_length());
        Evaluation::evaluate_population(pop, pop.capacity(), FitnessFunction::OneMax, &order, elitism)
    }

    #[test]
    fn test_allocate_zeroed() {
        let pop = Population::allocate(5, 12).unwrap();
        assert_eq!(pop.capacity(), 5);
        assert_eq!(pop.chromosome_length(), 12);
        assert!(pop.iter().all(|g| g.len() == 12 && g.count_ones() == 0));
    }

    #[test]
    fn test_copy_out_and_insert_are_copies() {
        let mut pop = Population::from_genotypes(vec![with_ones(4, 1), with_ones(4, 3)]);
        let mut scratch = Genotype::zeros(4);
        pop.copy_out(1, &mut scratch);
        assert_eq!(scratch, with_ones(4, 3));

        scratch.set_physical(3, true);
        assert_eq!(pop.get(1), &with_ones(4, 3), "copy_out must not alias");

        pop.insert(&scratch, 0);
        scratch.set_physical(0, false);
        assert_eq!(pop.get(0), &with_ones(4, 4), "insert must not alias");
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_insert_wrong_length_panics() {
        let mut pop = Population::allocate(2, 4).unwrap();
        pop.insert(&Genotype::zeros(5), 0);
    }

    #[test]
    fn test_elite_descending() {
        let pop = Population::from_genotypes(vec![
            with_ones(8, 2),
            with_ones(8, 7),
            with_ones(8, 4),
            with_ones(8, 8),
            with_ones(8, 1),
        ]);
        let eval = onemax_eval(&pop, 3);
        assert_eq!(eval.elite(), &[3, 1, 2]);
        assert_eq!(eval.best(), 3);
        assert_eq!(eval.best_fitness(), 8.0);
        assert_eq!(eval.ratings(), &[2.0, 7.0, 4.0, 8.0, 1.0]);
    }

    #[test]
    fn test_elite_ties_keep_earliest() {
        let pop = Population::from_genotypes(vec![
            with_ones(8, 1),
            with_ones(8, 5),
            with_ones(8, 5),
            with_ones(8, 5),
        ]);
        let eval = onemax_eval(&pop, 2);
        assert_eq!(eval.elite(), &[1, 2]);
        assert_eq!(eval.best(), 1);
    }

    #[test]
    fn test_elite_has_no_duplicates_when_first_is_best() {
        let pop = Population::from_genotypes(vec![
            with_ones(8, 8),
            with_ones(8, 1),
            with_ones(8, 2),
        ]);
        let eval = onemax_eval(&pop, 2);
        assert_eq!(eval.elite(), &[0, 2]);
    }

    #[test]
    fn test_zero_elitism_still_tracks_best() {
        let pop = Population::from_genotypes(vec![with_ones(8, 3), with_ones(8, 6)]);
        let eval = onemax_eval(&pop, 0);
        assert!(eval.elite().is_empty());
        assert_eq!(eval.best(), 1);
    }

    #[test]
    fn test_only_population_size_slots_evaluated() {
        let pop = Population::from_genotypes(vec![with_ones(4, 1), with_ones(4, 2), with_ones(4, 4)]);
        let order = BitOrder::identity(4);
        let eval = Evaluation::evaluate_population(&pop, 2, FitnessFunction::OneMax, &order, 1);
        assert_eq!(eval.len(), 2);
        assert_eq!(eval.best(), 1);
    }

    #[test]
    fn test_elite_matches_full_sort() {
        let mut rng = create_rng(42);
        for trial in 0..50 {
            let mut pop = Population::allocate(30, 16).unwrap();
            pop.randomize(&mut rng);
            let elitism = trial % 10;
            let eval = onemax_eval(&pop, elitism);

            let mut indices: Vec<usize> = (0..30).collect();
            // Stable sort: equal scores keep index order.
            indices.sort_by(|&a, &b| eval.rating(b).partial_cmp(&eval.rating(a)).unwrap());

            assert_eq!(eval.elite().len(), elitism);
            assert_eq!(eval.elite(), &indices[..elitism]);
            assert_eq!(eval.best(), indices[0]);
        }
    }
}
