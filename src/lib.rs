//! Generational binary genetic algorithm.
//!
//! Evolves a population of fixed-length bit strings toward the maximum of
//! a benchmark fitness function:
//!
//! - **OneMax**: count of bits set to 1
//! - **Rosenbrock**: negated banana valley over decoded 12-bit integer pairs
//! - **F101**: negated trigonometric landscape over decoded 10-bit integer pairs
//!
//! The engine is single-threaded and fully determined by its seed.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{FitnessFunction, GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_fitness(FitnessFunction::OneMax)
//!     .with_seed(7);
//! let result = GaRunner::run(&config).unwrap();
//! assert!(result.best_fitness <= 100.0);
//! ```

pub mod ga;
pub mod random;
