//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Configuration for the Genetic Algorithm.
///
/// Controls genome length, population size, selection size, operator
/// rates, and parallelism. The fitness function is supplied separately to
/// [`GaRunner`](super::GaRunner).
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.genome_size, 8);
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.num_generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_genome_size(32)
///     .with_population_size(100)
///     .with_num_parents(10)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of bits in every genome.
    pub genome_size: usize,

    /// Number of individuals at every generation boundary.
    pub population_size: usize,

    /// Number of generations to run. Zero is valid: the best of the
    /// initial population is returned.
    pub num_generations: usize,

    /// Number of individuals kept by truncation selection.
    ///
    /// These survive unchanged into the next generation (elitism) and are
    /// the only source of genetic material for new children.
    pub num_parents: usize,

    /// Probability (0.0–1.0) that a new child is produced by crossover
    /// followed by mutation rather than by mutation alone.
    pub crossover_rate: f64,

    /// Per-bit probability (0.0–1.0) of flipping during mutation.
    pub mutation_rate: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,

    /// Worker count for a dedicated evaluation pool.
    ///
    /// `None` uses rayon's global pool. `Some(n)` builds a pool of `n`
    /// threads for the duration of one run and releases it afterwards.
    pub num_threads: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            genome_size: 8,
            population_size: 20,
            num_generations: 30,
            num_parents: 3,
            crossover_rate: 0.75,
            mutation_rate: 0.05,
            parallel: true,
            num_threads: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the genome length.
    pub fn with_genome_size(mut self, n: usize) -> Self {
        self.genome_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the number of parents kept each generation.
    pub fn with_num_parents(mut self, n: usize) -> Self {
        self.num_parents = n;
        self
    }

    /// Sets the crossover rate, clamped into `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate, clamped into `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Evaluates on a dedicated pool of `n` threads.
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Fields can be assigned directly, bypassing the clamping builders,
    /// so rates are range-checked here as well.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.genome_size == 0 {
            return Err(invalid("genome_size must be at least 1"));
        }
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.num_parents == 0 {
            return Err(invalid("num_parents must be at least 1"));
        }
        if self.num_parents > self.population_size {
            return Err(invalid(format!(
                "num_parents ({}) exceeds population_size ({})",
                self.num_parents, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.num_threads == Some(0) {
            return Err(invalid("num_threads must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> GaError {
    GaError::InvalidConfig(message.into())
}
