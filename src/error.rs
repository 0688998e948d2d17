//! Error types for the GA.
//!
//! Contract violations (mismatched genome lengths, unevaluated individuals,
//! inconsistent configuration) and fitness-function failures all surface as
//! [`GaError`]. Nothing is recovered internally: the first error aborts the
//! operation that produced it.

use thiserror::Error;

/// Error raised by a caller-supplied fitness function.
///
/// The GA never retries or substitutes a default score; a failing fitness
/// function aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fitness evaluation failed: {message}")]
pub struct FitnessError {
    message: String,
}

impl FitnessError {
    /// Creates a fitness error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied by the fitness function.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error type for all fallible GA operations.
#[derive(Debug, Error)]
pub enum GaError {
    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A genome could not be constructed from its textual form.
    #[error("invalid genome: {0}")]
    InvalidGenome(String),

    /// Two genomes that must share a length do not.
    #[error("genome length mismatch: expected {expected}, got {actual}")]
    GenomeLengthMismatch { expected: usize, actual: usize },

    /// A forced crossover point lies past the end of the genome.
    #[error("crossover point {point} out of range for genome of length {len}")]
    CrossoverPointOutOfRange { point: usize, len: usize },

    /// Fitness was required but the individual has not been evaluated.
    #[error("individual {index} has not been evaluated")]
    Unevaluated { index: usize },

    /// The fitness function returned NaN, which cannot be ordered.
    #[error("individual {index} evaluated to NaN fitness")]
    NanFitness { index: usize },

    /// An operation that needs at least one individual got none.
    #[error("population is empty")]
    EmptyPopulation,

    /// The fitness function failed.
    #[error(transparent)]
    Fitness(#[from] FitnessError),

    /// The dedicated evaluation thread pool could not be started.
    #[cfg(feature = "parallel")]
    #[error("failed to build evaluation thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
