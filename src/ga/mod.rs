//! Binary Genetic Algorithm.
//!
//! A generational GA over fixed-length bit strings. Each generation is
//! evaluated, its best individuals are carried over unchanged (elitism),
//! and the remaining slots are filled in pairs by tournament selection,
//! single-point crossover and bit-flip mutation. Two population buffers
//! alternate roles so a generation is never modified while it is being
//! selected from.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters and the chosen [`FitnessFunction`]
//! - [`Evolution`]: All state of one run, advanced with [`Evolution::step`]
//! - [`GaRunner`]: Drives an [`Evolution`] to its generation budget
//! - [`GaResult`]: Final best individual and fitness history
//!
//! # Submodules
//!
//! - [`codec`]: Logical bit addressing ([`BitOrder`]) and two's-complement decoding
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

pub mod codec;
mod config;
mod error;
mod fitness;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use codec::BitOrder;
pub use config::GaConfig;
pub use error::{GaError, Result};
pub use fitness::FitnessFunction;
pub use population::{Evaluation, Population};
pub use runner::{Evolution, GaResult, GaRunner, GenerationStats};
pub use selection::Tournament;
pub use types::Genotype;
