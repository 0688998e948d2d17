//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → (evaluation → selection → reproduction)* → evaluation →
//! best individual. The loop always runs exactly
//! [`num_generations`](GaConfig::num_generations) generations.

use super::config::GaConfig;
use super::evaluation::evaluate_population;
use super::population::generate_population;
use super::reproduction::reproduce;
use super::selection::{find_best, select_parents};
use super::types::{Individual, Population};
use crate::error::GaError;
use crate::fitness::FitnessFunction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaOutcome {
    /// The fittest individual of the final, freshly evaluated population.
    pub best: Individual,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best parent fitness of each generation.
    ///
    /// Non-decreasing, because parents survive unchanged into the next
    /// generation.
    pub parent_fitness_history: Vec<f64>,
}

/// Per-generation summary passed to the callback of
/// [`GaRunner::run_with_callback`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based index of the generation just completed.
    pub generation: usize,

    /// Total generations in the run.
    pub num_generations: usize,

    /// Highest fitness among the selected parents.
    pub best_parent_fitness: f64,

    /// Mean fitness of the selected parents.
    pub mean_parent_fitness: f64,
}

impl GenerationStats {
    fn from_parents(generation: usize, num_generations: usize, parents: &[Individual]) -> Self {
        let scores: Vec<f64> = parents.iter().filter_map(|p| p.fitness).collect();
        let best_parent_fitness = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_parent_fitness = if scores.is_empty() {
            f64::NAN
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        Self {
            generation,
            num_generations,
            best_parent_fitness,
            mean_parent_fitness,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::fitness::OneMax;
/// use u_bitga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let outcome = GaRunner::run(&OneMax, &config).unwrap();
/// assert_eq!(outcome.generations, 30);
/// println!("best: {} ({:?})", outcome.best.genome, outcome.best.fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns the first error raised by configuration validation, the
    /// fitness function, or a genetic operator. There is no partial result.
    pub fn run<F: FitnessFunction + ?Sized>(
        fitness: &F,
        config: &GaConfig,
    ) -> Result<GaOutcome, GaError> {
        Self::run_with_callback(fitness, config, |_| {})
    }

    /// Runs the GA, calling `on_generation` after every generation.
    ///
    /// The callback runs on the calling thread, in generation order.
    pub fn run_with_callback<F, C>(
        fitness: &F,
        config: &GaConfig,
        mut on_generation: C,
    ) -> Result<GaOutcome, GaError>
    where
        F: FitnessFunction + ?Sized,
        C: FnMut(&GenerationStats),
    {
        config.validate()?;

        let workers = Workers::new(config)?;
        let mut rng = create_rng(config.seed);

        info!(
            genome_size = config.genome_size,
            population_size = config.population_size,
            num_generations = config.num_generations,
            num_parents = config.num_parents,
            "starting GA run"
        );

        let mut population = generate_population(config, &mut rng);
        let mut remaining = config.num_generations;
        let mut parent_fitness_history = Vec::with_capacity(config.num_generations);

        while remaining > 0 {
            let generation = config.num_generations - remaining + 1;
            let (parents, next) = advance(&workers, &population, fitness, config, &mut rng)?;

            let stats = GenerationStats::from_parents(generation, config.num_generations, &parents);
            info!("generation {} of {}", generation, config.num_generations);
            debug!(
                generation,
                best_parent_fitness = stats.best_parent_fitness,
                mean_parent_fitness = stats.mean_parent_fitness,
                "generation complete"
            );

            parent_fitness_history.push(stats.best_parent_fitness);
            on_generation(&stats);

            population = next;
            remaining -= 1;
        }

        // Children from the last reproduction carry no fitness yet.
        let population = workers.evaluate(&population, fitness)?;
        let best = find_best(&population)?.clone();

        info!(
            best_fitness = best.fitness,
            best_genome = %best.genome,
            "GA run finished"
        );

        Ok(GaOutcome {
            best,
            generations: config.num_generations,
            parent_fitness_history,
        })
    }
}

/// Runs the GA and returns only the best individual.
///
/// Equivalent to `GaRunner::run(fitness, config).map(|o| o.best)`.
pub fn evolve<F: FitnessFunction + ?Sized>(
    fitness: &F,
    config: &GaConfig,
) -> Result<Individual, GaError> {
    GaRunner::run(fitness, config).map(|outcome| outcome.best)
}

/// One generation: evaluate, select, reproduce.
///
/// Evaluation uses rayon's global pool when `config.parallel` is set.
pub fn run_generation<F, R>(
    population: &[Individual],
    fitness: &F,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population, GaError>
where
    F: FitnessFunction + ?Sized,
    R: Rng,
{
    let workers = Workers::global(config.parallel);
    advance(&workers, population, fitness, config, rng).map(|(_, next)| next)
}

/// Creates the run's random source: seeded when `seed` is set, otherwise
/// seeded from OS entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Returns `(parents, next_generation)`.
fn advance<F, R>(
    workers: &Workers,
    population: &[Individual],
    fitness: &F,
    config: &GaConfig,
    rng: &mut R,
) -> Result<(Population, Population), GaError>
where
    F: FitnessFunction + ?Sized,
    R: Rng,
{
    let evaluated = workers.evaluate(population, fitness)?;
    let parents = select_parents(&evaluated, config.num_parents)?;
    let next = reproduce(&parents, config, rng)?;
    Ok((parents, next))
}

/// Where evaluation runs.
///
/// A dedicated pool lives exactly as long as the run that built it; its
/// threads exit when it is dropped.
struct Workers {
    parallel: bool,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Workers {
    fn global(parallel: bool) -> Self {
        Self {
            parallel,
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    #[cfg(feature = "parallel")]
    fn new(config: &GaConfig) -> Result<Self, GaError> {
        let pool = match config.num_threads {
            Some(n) if config.parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("ga-eval-{i}"))
                    .build()?,
            ),
            _ => None,
        };
        Ok(Self {
            parallel: config.parallel,
            pool,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn new(config: &GaConfig) -> Result<Self, GaError> {
        Ok(Self::global(config.parallel))
    }

    #[cfg(feature = "parallel")]
    fn evaluate<F: FitnessFunction + ?Sized>(
        &self,
        population: &[Individual],
        fitness: &F,
    ) -> Result<Population, GaError> {
        match &self.pool {
            Some(pool) => pool.install(|| evaluate_population(population, fitness, true)),
            None => evaluate_population(population, fitness, self.parallel),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate<F: FitnessFunction + ?Sized>(
        &self,
        population: &[Individual],
        fitness: &F,
    ) -> Result<Population, GaError> {
        evaluate_population(population, fitness, self.parallel)
    }
}

// ============================================================================
// Tests
// ============================================================================
