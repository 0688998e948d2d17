//! Next-generation construction with elitism.
//!
//! [`reproduce`] starts the new population from the selected parents,
//! unchanged, then fills the remaining slots with children. Each child comes
//! from one independent trial whose strategy is drawn by
//! [`Reproduction::choose`]:
//!
//! - [`Reproduction::Crossover`] (probability `crossover_rate`): two parents
//!   drawn with replacement, spliced by single-point crossover, then mutated.
//! - [`Reproduction::MutationOnly`] (otherwise): one parent drawn with
//!   replacement, then mutated.

use super::config::GaConfig;
use super::operators::{crossover, mutate_genome};
use super::types::{Genome, Individual, Population};
use crate::error::GaError;
use rand::Rng;
use tracing::debug;

/// How a single child is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reproduction {
    /// Crossover of two random parents, then mutation.
    Crossover,
    /// Mutation of one random parent.
    MutationOnly,
}

impl Reproduction {
    /// Draws a strategy: `Crossover` with probability `crossover_rate`,
    /// `MutationOnly` otherwise.
    ///
    /// The rate is clamped into `[0, 1]`; NaN behaves as `0.0`.
    pub fn choose<R: Rng>(crossover_rate: f64, rng: &mut R) -> Self {
        let rate = if crossover_rate.is_nan() {
            0.0
        } else {
            crossover_rate.clamp(0.0, 1.0)
        };
        if rng.random_bool(rate) {
            Reproduction::Crossover
        } else {
            Reproduction::MutationOnly
        }
    }

    /// Produces one child genome from `parents` using this strategy.
    ///
    /// `parents` must be non-empty.
    fn breed<R: Rng>(
        self,
        parents: &[Individual],
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<Genome, GaError> {
        match self {
            Reproduction::Crossover => {
                let first = pick(parents, rng);
                let second = pick(parents, rng);
                let child = crossover(first, second, rng)?;
                Ok(mutate_genome(&child, mutation_rate, rng))
            }
            Reproduction::MutationOnly => {
                let parent = pick(parents, rng);
                Ok(mutate_genome(parent, mutation_rate, rng))
            }
        }
    }
}

/// Uniform draw with replacement.
fn pick<'a, R: Rng>(parents: &'a [Individual], rng: &mut R) -> &'a Genome {
    &parents[rng.random_range(0..parents.len())].genome
}

/// Builds a population of exactly `config.population_size` from `parents`.
///
/// The returned population begins with every parent, unchanged and in
/// order. New children carry no fitness.
///
/// # Errors
/// - [`GaError::InvalidConfig`] if there are more parents than
///   `population_size`
/// - [`GaError::EmptyPopulation`] if children are needed but `parents` is
///   empty
/// - [`GaError::GenomeLengthMismatch`] if parents disagree on genome length
pub fn reproduce<R: Rng>(
    parents: &[Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population, GaError> {
    let target = config.population_size;
    if parents.len() > target {
        return Err(GaError::InvalidConfig(format!(
            "{} parents exceed population_size {target}",
            parents.len()
        )));
    }
    if parents.is_empty() && target > 0 {
        return Err(GaError::EmptyPopulation);
    }

    let mut next_gen: Population = Vec::with_capacity(target);
    next_gen.extend_from_slice(parents);

    let mut crossovers = 0usize;
    while next_gen.len() < target {
        let strategy = Reproduction::choose(config.crossover_rate, rng);
        if strategy == Reproduction::Crossover {
            crossovers += 1;
        }
        let child = strategy.breed(parents, config.mutation_rate, rng)?;
        next_gen.push(Individual::new(child));
    }

    debug!(
        parents = parents.len(),
        children = target - parents.len(),
        crossovers,
        "reproduced next generation"
    );

    Ok(next_gen)
}
