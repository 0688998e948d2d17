//! Generational genetic algorithm over bit-string genomes.
//!
//! Optimizes fixed-length binary genomes against a pluggable fitness
//! function using:
//!
//! - **Truncation selection**: the best `num_parents` individuals of each
//!   generation become parents.
//! - **Elitism**: parents survive unchanged into the next generation.
//! - **Single-point crossover** with a point drawn from `[0, L]` inclusive.
//! - **Per-bit mutation** at a fixed rate.
//! - **Parallel evaluation** on a rayon pool (feature `parallel`, on by
//!   default), with results kept in population order.
//!
//! The run length is fixed: there is no convergence-based early stop.
//!
//! # Example
//!
//! ```
//! use u_bitga::fitness::OneMax;
//! use u_bitga::ga::{evolve, GaConfig};
//!
//! let config = GaConfig::default()
//!     .with_genome_size(16)
//!     .with_population_size(40)
//!     .with_num_generations(50)
//!     .with_num_parents(4)
//!     .with_seed(7);
//!
//! let best = evolve(&OneMax, &config).unwrap();
//! assert_eq!(best.genome.len(), 16);
//! ```
//!
//! # Architecture
//!
//! - [`ga`]: data model, operators, and the evolutionary driver
//! - [`fitness`]: the fitness-function capability and bit-string benchmarks
//! - [`error`]: error types shared by every stage
//!
//! The library emits `tracing` events (run start/end at `info`, one
//! "generation K of N" line per generation, statistics at `debug`) and
//! never installs a subscriber.

pub mod error;
pub mod fitness;
pub mod ga;
