//! Fitness evaluation.
//!
//! Evaluation of distinct individuals is independent, so a population can
//! be scored on a rayon pool. Output order always matches input order, and
//! the first failure aborts the whole population.

use super::types::{Individual, Population};
use crate::error::GaError;
use crate::fitness::FitnessFunction;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Returns a copy of `individual` scored by `fitness`.
///
/// Any previous fitness is overwritten; nothing is cached.
pub fn evaluate_individual<F: FitnessFunction + ?Sized>(
    individual: &Individual,
    fitness: &F,
) -> Result<Individual, GaError> {
    let score = fitness.evaluate(&individual.genome)?;
    Ok(individual.with_fitness(score))
}

/// Scores every individual, preserving order.
///
/// With `parallel` set (and the `parallel` feature enabled) the work runs
/// on the current rayon pool. A NaN score is rejected with
/// [`GaError::NanFitness`].
pub fn evaluate_population<F: FitnessFunction + ?Sized>(
    population: &[Individual],
    fitness: &F,
    parallel: bool,
) -> Result<Population, GaError> {
    let score = |(index, ind): (usize, &Individual)| -> Result<Individual, GaError> {
        let scored = evaluate_individual(ind, fitness)?;
        match scored.fitness {
            Some(f) if f.is_nan() => Err(GaError::NanFitness { index }),
            _ => Ok(scored),
        }
    };

    #[cfg(feature = "parallel")]
    let scored: Result<Population, GaError> = if parallel {
        population.par_iter().enumerate().map(score).collect()
    } else {
        population.iter().enumerate().map(score).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scored: Result<Population, GaError> = {
        let _ = parallel;
        population.iter().enumerate().map(score).collect()
    };

    scored
}
