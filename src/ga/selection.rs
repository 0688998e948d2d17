//! Truncation selection.
//!
//! Keeps the top-`k` individuals by fitness. All strategies here assume
//! **maximization** (higher fitness = better) and require every individual
//! to be evaluated.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Individual, Population};
use crate::error::GaError;
use std::cmp::Ordering;

/// Returns the `num_parents` fittest individuals, best first.
///
/// The sort is stable, so individuals with equal fitness keep their
/// population order and the result is deterministic.
///
/// # Errors
/// - [`GaError::Unevaluated`] if any individual lacks a fitness
/// - [`GaError::NanFitness`] if any fitness is NaN
/// - [`GaError::InvalidConfig`] if `num_parents` exceeds the population size
pub fn select_parents(
    population: &[Individual],
    num_parents: usize,
) -> Result<Population, GaError> {
    if num_parents > population.len() {
        return Err(GaError::InvalidConfig(format!(
            "cannot select {num_parents} parents from {} individuals",
            population.len()
        )));
    }

    let mut scored = population
        .iter()
        .enumerate()
        .map(|(index, ind)| fitness_of(index, ind).map(|f| (f, ind)))
        .collect::<Result<Vec<_>, GaError>>()?;

    scored.sort_by(|a, b| descending(a.0, b.0));

    Ok(scored
        .into_iter()
        .take(num_parents)
        .map(|(_, ind)| ind.clone())
        .collect())
}

/// Finds the individual with the highest fitness.
///
/// Ties are broken by first occurrence in `population`.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `population` is empty,
/// [`GaError::Unevaluated`] if any individual lacks a fitness,
/// [`GaError::NanFitness`] if any fitness is NaN.
pub fn find_best(population: &[Individual]) -> Result<&Individual, GaError> {
    let mut best: Option<(f64, &Individual)> = None;
    for (index, ind) in population.iter().enumerate() {
        let f = fitness_of(index, ind)?;
        match best {
            Some((best_f, _)) if f <= best_f => {}
            _ => best = Some((f, ind)),
        }
    }
    best.map(|(_, ind)| ind).ok_or(GaError::EmptyPopulation)
}

/// Fitness of an individual, which must be set and not NaN.
fn fitness_of(index: usize, ind: &Individual) -> Result<f64, GaError> {
    match ind.fitness {
        None => Err(GaError::Unevaluated { index }),
        Some(f) if f.is_nan() => Err(GaError::NanFitness { index }),
        Some(f) => Ok(f),
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
