//! Fitness function interface and bit-string benchmarks.
//!
//! A fitness function maps a [`Genome`] to a score; higher is better. It
//! must be pure: the evaluator may call it from several threads at once
//! and in any order.
//!
//! Plain closures work directly:
//!
//! ```
//! use u_bitga::fitness::FitnessFunction;
//! use u_bitga::ga::Genome;
//!
//! let ones = |g: &Genome| g.count_ones() as f64;
//! assert_eq!(ones.evaluate(&Genome::ones(4)).unwrap(), 4.0);
//! ```
//!
//! Closures that can fail go through [`fallible`].

use crate::error::FitnessError;
use crate::ga::Genome;

/// Scores a genome. Higher is better.
///
/// `Send + Sync` because evaluation may run on a rayon pool.
pub trait FitnessFunction: Send + Sync {
    /// Computes the fitness of `genome`.
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Genome) -> f64 + Send + Sync,
{
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        Ok(self(genome))
    }
}

/// Adapter for fitness closures that return a `Result`.
///
/// Built by [`fallible`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(F);

/// Wraps a closure returning `Result<f64, FitnessError>` as a
/// [`FitnessFunction`].
///
/// ```
/// use u_bitga::error::FitnessError;
/// use u_bitga::fitness::{fallible, FitnessFunction};
/// use u_bitga::ga::Genome;
///
/// let f = fallible(|g: &Genome| {
///     if g.is_empty() {
///         Err(FitnessError::new("empty genome"))
///     } else {
///         Ok(g.count_ones() as f64)
///     }
/// });
/// assert!(f.evaluate(&Genome::default()).is_err());
/// ```
pub fn fallible<F>(f: F) -> Fallible<F>
where
    F: Fn(&Genome) -> Result<f64, FitnessError> + Send + Sync,
{
    Fallible(f)
}

impl<F> FitnessFunction for Fallible<F>
where
    F: Fn(&Genome) -> Result<f64, FitnessError> + Send + Sync,
{
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        (self.0)(genome)
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

/// OneMax: the number of set bits. Optimum is the all-ones genome.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMax;

impl FitnessFunction for OneMax {
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        Ok(genome.count_ones() as f64)
    }
}

/// LeadingOnes: the length of the run of set bits starting at position 0.
///
/// Harder than [`OneMax`] for a GA because a bit only counts once every
/// bit before it is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingOnes;

impl FitnessFunction for LeadingOnes {
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        Ok(genome.bits().iter().take_while(|&&b| b).count() as f64)
    }
}

/// Number of positions matching a fixed target genome.
///
/// Genomes of a different length than the target are a caller error.
#[derive(Debug, Clone)]
pub struct Target {
    target: Genome,
}

impl Target {
    /// Creates a target-matching fitness function.
    pub fn new(target: Genome) -> Self {
        Self { target }
    }

    /// The genome being matched.
    pub fn target(&self) -> &Genome {
        &self.target
    }
}

impl FitnessFunction for Target {
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        if genome.len() != self.target.len() {
            return Err(FitnessError::new(format!(
                "genome length {} does not match target length {}",
                genome.len(),
                self.target.len()
            )));
        }
        Ok((genome.len() - genome.hamming_distance(&self.target)) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(s: &str) -> Genome {
        s.parse().unwrap()
    }

    #[test]
    fn test_closure_is_fitness_function() {
        let f = |g: &Genome| -(g.count_ones() as f64);
        assert_eq!(f.evaluate(&genome("111")).unwrap(), -3.0);
    }

    #[test]
    fn test_fallible_propagates_error() {
        let f = fallible(|_: &Genome| Err(FitnessError::new("nope")));
        let err = f.evaluate(&genome("1")).unwrap_err();
        assert_eq!(err.message(), "nope");
    }

    #[test]
    fn test_one_max() {
        assert_eq!(OneMax.evaluate(&genome("10110")).unwrap(), 3.0);
        assert_eq!(OneMax.evaluate(&Genome::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_leading_ones() {
        assert_eq!(LeadingOnes.evaluate(&genome("11011")).unwrap(), 2.0);
        assert_eq!(LeadingOnes.evaluate(&genome("0111")).unwrap(), 0.0);
        assert_eq!(LeadingOnes.evaluate(&genome("1111")).unwrap(), 4.0);
    }

    #[test]
    fn test_target() {
        let f = Target::new(genome("1010"));
        assert_eq!(f.evaluate(&genome("1010")).unwrap(), 4.0);
        assert_eq!(f.evaluate(&genome("0101")).unwrap(), 0.0);
        assert_eq!(f.evaluate(&genome("1000")).unwrap(), 3.0);
        assert!(f.evaluate(&genome("10")).is_err());
    }
}
