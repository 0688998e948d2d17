//! Generational bit-string Genetic Algorithm.
//!
//! Individuals are fixed-length [`Genome`]s scored by a caller-supplied
//! [`FitnessFunction`](crate::fitness::FitnessFunction). Each generation is
//! evaluated, truncated to its best `num_parents`, and refilled by
//! single-point crossover and per-bit mutation. Parents survive unchanged
//! (elitism), so the best parent fitness never decreases.
//!
//! # Key Types
//!
//! - [`Genome`], [`Individual`], [`Population`]: the data model
//! - [`GaConfig`]: Algorithm parameters (sizes, rates, parallelism, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaOutcome`]: Final optimization result with per-generation history
//!
//! # Stages
//!
//! - [`operators`]: [`flip_bit`], [`mutate_genome`], [`crossover`]
//! - [`generate_population`]: random initial population
//! - [`evaluate_population`]: order-preserving, optionally parallel scoring
//! - [`select_parents`]: truncation selection
//! - [`reproduce`]: elitist refill governed by crossover and mutation rates
//! - [`run_generation`] / [`evolve`]: the driver
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod evaluation;
pub mod operators;
mod population;
mod reproduction;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use evaluation::{evaluate_individual, evaluate_population};
pub use operators::{crossover, crossover_at, flip_bit, mutate_genome, Parent};
pub use population::{generate_population, random_genome};
pub use reproduction::{reproduce, Reproduction};
pub use runner::{create_rng, evolve, run_generation, GaOutcome, GaRunner, GenerationStats};
pub use selection::{find_best, select_parents};
pub use types::{Genome, Individual, Population};
