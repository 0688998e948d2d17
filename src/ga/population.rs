//! Initial population generation.

use super::config::GaConfig;
use super::types::{Genome, Individual, Population};
use rand::Rng;

/// Creates a genome of `len` independent fair coin flips.
pub fn random_genome<R: Rng>(len: usize, rng: &mut R) -> Genome {
    (0..len).map(|_| rng.random_bool(0.5)).collect()
}

/// Creates `population_size` unevaluated individuals with random genomes
/// of length `genome_size`.
pub fn generate_population<R: Rng>(config: &GaConfig, rng: &mut R) -> Population {
    (0..config.population_size)
        .map(|_| Individual::new(random_genome(config.genome_size, rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_population_shape() {
        let config = GaConfig::default()
            .with_genome_size(12)
            .with_population_size(30);
        let mut rng = StdRng::seed_from_u64(42);

        let population = generate_population(&config, &mut rng);

        assert_eq!(population.len(), 30);
        for ind in &population {
            assert_eq!(ind.genome.len(), 12);
            assert!(ind.fitness.is_none());
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let config = GaConfig::default();
        let a = generate_population(&config, &mut StdRng::seed_from_u64(9));
        let b = generate_population(&config, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_genome_is_roughly_balanced() {
        let mut rng = StdRng::seed_from_u64(42);
        let ones = random_genome(10_000, &mut rng).count_ones();
        assert!((4500..5500).contains(&ones), "got {ones} ones");
    }
}
