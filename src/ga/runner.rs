//! GA evolutionary loop execution.
//!
//! [`Evolution`] owns every piece of run state: both generation buffers,
//! the fitness table and elite ranking, the bit order, the generation
//! counter and the random generator. [`GaRunner`] drives it from
//! initialization to the generation budget:
//! evaluation → elitism → selection → crossover → mutation → swap → repeat.

use super::codec::BitOrder;
use super::config::GaConfig;
use super::error::Result;
use super::fitness::FitnessFunction;
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::population::{Evaluation, Population};
use super::selection::Tournament;
use super::types::Genotype;
use crate::random::{create_rng, entropy_seed};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

/// Best fitness of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation index; 0 is the initial random population.
    pub generation: usize,

    /// Fitness of the best individual in that generation.
    pub best_fitness: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final generation.
    pub best: Genotype,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generational replacements executed.
    pub generations: usize,

    /// Best fitness per generation, initial population included.
    pub fitness_history: Vec<f64>,
}

/// State of one evolutionary run.
///
/// The run is RUNNING until the generation counter reaches
/// `max_generations`, then DONE; [`step`](Evolution::step) does nothing
/// once done.
#[derive(Debug)]
pub struct Evolution<R: Rng = StdRng> {
    config: GaConfig,
    fitness: FitnessFunction,
    tournament: Tournament,
    order: BitOrder,
    current: Population,
    next: Population,
    evaluation: Evaluation,
    generation: usize,
    parents: (Genotype, Genotype),
    rng: R,
}

impl Evolution<StdRng> {
    /// Validates `config` and initializes a run.
    ///
    /// Uses `config.seed`, or a clock and process-id seed when unset.
    pub fn new(config: GaConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        info!("seeding generator with {seed}");
        Self::with_rng(config, create_rng(seed))
    }
}

impl<R: Rng> Evolution<R> {
    /// Validates `config` and initializes a run drawing from `rng`.
    ///
    /// Both generation buffers are allocated, the current one is filled
    /// with random physical bits, the bit order is built (and shuffled if
    /// configured), and the initial population is evaluated.
    pub fn with_rng(config: GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let Some(fitness) = config.fitness else {
            unreachable!("validate rejects a missing fitness function");
        };
        let capacity = config.allocation_size();
        let len = config.chromosome_length;

        let mut current = Population::allocate(capacity, len)?;
        let next = Population::allocate(capacity, len)?;
        current.randomize(&mut rng);
        let order = BitOrder::try_new(len, config.shuffle_bits, &mut rng)?;

        let evaluation = Evaluation::evaluate_population(
            &current,
            config.population_size,
            fitness,
            &order,
            config.elitism_size,
        );

        info!(
            "starting {fitness}: population {} ({capacity} slots), {len} bits, \
             crossover {}, mutation {}, tournament {}, elitism {}, {} generations{}",
            config.population_size,
            config.crossover_rate,
            config.mutation_rate,
            config.tournament_size,
            config.elitism_size,
            config.max_generations,
            if config.shuffle_bits { ", shuffled bit order" } else { "" },
        );

        Ok(Self {
            tournament: Tournament::new(config.tournament_size),
            fitness,
            order,
            current,
            next,
            evaluation,
            generation: 0,
            parents: (Genotype::zeros(len), Genotype::zeros(len)),
            rng,
            config,
        })
    }

    /// Returns `true` once the generation budget is spent.
    pub fn is_done(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    /// Performs one generational replacement.
    ///
    /// Returns the statistics of the new generation, or `None` if the run
    /// is already done.
    pub fn step(&mut self) -> Option<GenerationStats> {
        if self.is_done() {
            return None;
        }

        let elite_count = self.config.elitism_size;
        for (slot, &index) in self.evaluation.elite().iter().enumerate() {
            self.next.insert(self.current.get(index), slot);
        }

        let (first, second) = &mut self.parents;
        let mut slot = elite_count;
        while slot < self.next.capacity() {
            self.tournament
                .select_into(&self.current, &self.evaluation, first, &mut self.rng);
            self.tournament
                .select_into(&self.current, &self.evaluation, second, &mut self.rng);

            if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                let point = single_point_crossover(first, second, &mut self.rng);
                trace!("slot {slot}: crossover at {point}");
            }
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                let bit = bit_flip_mutation(first, &self.order, &mut self.rng);
                trace!("slot {slot}: flipped bit {bit}");
            }
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                let bit = bit_flip_mutation(second, &self.order, &mut self.rng);
                trace!("slot {}: flipped bit {bit}", slot + 1);
            }

            self.next.insert(first, slot);
            self.next.insert(second, slot + 1);
            slot += 2;
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        self.evaluation = Evaluation::evaluate_population(
            &self.current,
            self.config.population_size,
            self.fitness,
            &self.order,
            elite_count,
        );

        let stats = self.stats();
        debug!(
            "generation {:03}: best fitness {:.6}",
            stats.generation, stats.best_fitness
        );
        Some(stats)
    }

    /// Statistics of the current generation.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            best_fitness: self.evaluation.best_fitness(),
        }
    }

    /// Completed generational replacements.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The generation currently being selected from.
    pub fn current(&self) -> &Population {
        &self.current
    }

    /// Fitness table and elite ranking of the current generation.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// The run's logical-to-physical bit order.
    pub fn bit_order(&self) -> &BitOrder {
        &self.order
    }

    /// Best genotype of the current generation.
    pub fn best(&self) -> &Genotype {
        self.current.get(self.evaluation.best())
    }

    /// Consumes the run and packages its final state.
    pub fn into_result(self, fitness_history: Vec<f64>) -> GaResult {
        GaResult {
            best_fitness: self.evaluation.best_fitness(),
            best: self.best().clone(),
            generations: self.generation,
            fitness_history,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{FitnessFunction, GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_fitness(FitnessFunction::OneMax)
///     .with_max_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.generations, 20);
/// assert_eq!(result.fitness_history.len(), 21);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to its generation budget.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(config, |_| {})
    }

    /// Runs the GA, reporting every generation (the initial one included)
    /// to `observer`.
    pub fn run_with_observer<F>(config: &GaConfig, observer: F) -> Result<GaResult>
    where
        F: FnMut(&GenerationStats),
    {
        let evolution = Evolution::new(config.clone())?;
        Ok(Self::drive(evolution, observer))
    }

    /// Runs an already initialized evolution to completion.
    pub fn drive<R, F>(mut evolution: Evolution<R>, mut observer: F) -> GaResult
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        let mut fitness_history = Vec::with_capacity(evolution.config().max_generations + 1);

        let initial = evolution.stats();
        fitness_history.push(initial.best_fitness);
        observer(&initial);

        while let Some(stats) = evolution.step() {
            fitness_history.push(stats.best_fitness);
            observer(&stats);
        }

        let result = evolution.into_result(fitness_history);
        info!(
            "finished after {} generations, best fitness {:.6}",
            result.generations, result.best_fitness
        );
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
