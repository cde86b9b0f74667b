//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::error::{GaError, Result};
use super::fitness::FitnessFunction;

/// Configuration for the binary Genetic Algorithm.
///
/// Controls population size, chromosome length, operator rates, selection
/// pressure, elitism, termination and the fitness function.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_generations, 50);
/// assert!(config.fitness.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{FitnessFunction, GaConfig};
///
/// let config = GaConfig::default()
///     .with_fitness(FitnessFunction::Rosenbrock)
///     .with_population_size(100)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.2)
///     .with_shuffle(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals selected from and evaluated each generation.
    pub population_size: usize,

    /// Number of bits in every genotype.
    pub chromosome_length: usize,

    /// Probability of recombining a pair of selected parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each offspring, drawn independently (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of candidates drawn per tournament.
    ///
    /// Higher values mean stronger selection pressure.
    pub tournament_size: usize,

    /// Number of best individuals copied unchanged into the next generation.
    pub elitism_size: usize,

    /// Number of generational replacements before the run stops.
    pub max_generations: usize,

    /// Fitness function to maximize. Must be set before running.
    pub fitness: Option<FitnessFunction>,

    /// Whether to permute the logical-to-physical bit order at startup.
    pub shuffle_bits: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` derives a seed from the clock and process id.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            chromosome_length: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.5,
            tournament_size: 3,
            elitism_size: 2,
            max_generations: 50,
            fitness: None,
            shuffle_bits: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length in bits.
    pub fn with_chromosome_length(mut self, len: usize) -> Self {
        self.chromosome_length = len;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism_size(mut self, n: usize) -> Self {
        self.elitism_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the fitness function.
    pub fn with_fitness(mut self, fitness: FitnessFunction) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Enables or disables bit-order shuffling.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_bits = shuffle;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of genotype slots reserved per generation buffer.
    ///
    /// Rounded up so that `allocation_size() - elitism_size` is even and
    /// offspring are always produced in pairs.
    pub fn allocation_size(&self) -> usize {
        let non_elite = self.population_size.saturating_sub(self.elitism_size);
        self.population_size + non_elite % 2
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::invalid("population_size", "must be at least 1"));
        }
        if self.chromosome_length == 0 {
            return Err(GaError::invalid("chromosome_length", "must be at least 1"));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.tournament_size == 0 {
            return Err(GaError::invalid("tournament_size", "must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(GaError::invalid(
                "tournament_size",
                format!(
                    "{} exceeds population_size {}",
                    self.tournament_size, self.population_size
                ),
            ));
        }
        if self.elitism_size >= self.population_size {
            return Err(GaError::invalid(
                "elitism_size",
                format!(
                    "{} must be below population_size {}",
                    self.elitism_size, self.population_size
                ),
            ));
        }
        if self.max_generations == 0 {
            return Err(GaError::invalid("max_generations", "must be at least 1"));
        }
        let fitness = self.fitness.ok_or(GaError::MissingFitnessFunction)?;
        let required = fitness.min_chromosome_length();
        if self.chromosome_length < required {
            return Err(GaError::ChromosomeTooShort {
                function: fitness,
                required,
                actual: self.chromosome_length,
            });
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(GaError::invalid(name, format!("{rate} is outside [0, 1]")))
    }
}
