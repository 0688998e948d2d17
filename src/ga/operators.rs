//! Bit-string genetic operators.
//!
//! Pure transformations on [`Genome`]s. Every operator returns a new genome
//! and leaves its inputs untouched; randomness is drawn from a caller-owned
//! [`Rng`] so results are reproducible under a fixed seed.
//!
//! # Crossover Operators
//!
//! - [`crossover`]: single-point crossover with a random point in `[0, L]`
//! - [`crossover_at`]: the same splice with point and head source fixed
//!
//! # Mutation Operators
//!
//! - [`flip_bit`]: negate one bit
//! - [`mutate_genome`]: independent per-bit flips — O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Genome;
use crate::error::GaError;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Which parent supplies the head (`[0, point)`) of a crossover child.
///
/// The other parent supplies the tail (`[point, L)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The first genome argument.
    First,
    /// The second genome argument.
    Second,
}

impl Parent {
    /// Picks either parent with probability 0.5.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Parent::First
        } else {
            Parent::Second
        }
    }
}

/// Single-point crossover.
///
/// Picks a point `p` uniformly from `[0, L]` **inclusive** and a head source
/// uniformly from the two parents, then returns `head[0..p] ++ tail[p..L]`.
/// A point of `0` or `L` yields an exact copy of one parent; this is a valid
/// outcome, not an error.
///
/// # Errors
/// [`GaError::GenomeLengthMismatch`] if the parents differ in length.
pub fn crossover<R: Rng>(
    genome1: &Genome,
    genome2: &Genome,
    rng: &mut R,
) -> Result<Genome, GaError> {
    check_lengths(genome1, genome2)?;

    let point = rng.random_range(0..=genome1.len());
    let head = Parent::random(rng);
    crossover_at(genome1, genome2, point, head)
}

/// Single-point crossover at a fixed point with a fixed head source.
///
/// ```
/// use u_bitga::ga::Genome;
/// use u_bitga::ga::operators::{crossover_at, Parent};
///
/// let a: Genome = "1111".parse().unwrap();
/// let b: Genome = "0000".parse().unwrap();
///
/// let child = crossover_at(&a, &b, 1, Parent::Second).unwrap();
/// assert_eq!(child.to_string(), "0111");
/// ```
///
/// # Errors
/// [`GaError::GenomeLengthMismatch`] if the parents differ in length,
/// [`GaError::CrossoverPointOutOfRange`] if `point > L`.
pub fn crossover_at(
    genome1: &Genome,
    genome2: &Genome,
    point: usize,
    head: Parent,
) -> Result<Genome, GaError> {
    check_lengths(genome1, genome2)?;

    let len = genome1.len();
    if point > len {
        return Err(GaError::CrossoverPointOutOfRange { point, len });
    }

    let (head, tail) = match head {
        Parent::First => (genome1, genome2),
        Parent::Second => (genome2, genome1),
    };

    Ok(head.bits()[..point]
        .iter()
        .chain(&tail.bits()[point..])
        .copied()
        .collect())
}

fn check_lengths(genome1: &Genome, genome2: &Genome) -> Result<(), GaError> {
    if genome1.len() != genome2.len() {
        return Err(GaError::GenomeLengthMismatch {
            expected: genome1.len(),
            actual: genome2.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Returns the opposite bit.
#[inline]
pub fn flip_bit(bit: bool) -> bool {
    !bit
}

/// Per-bit mutation: each position flips independently with probability
/// `mutation_rate`.
///
/// Rates outside `[0, 1]` are clamped into that range and NaN is treated
/// as `0.0`. A rate of `0` returns an identical genome; a rate of `1`
/// returns its complement.
///
/// # Complexity
/// O(n)
pub fn mutate_genome<R: Rng>(genome: &Genome, mutation_rate: f64, rng: &mut R) -> Genome {
    let rate = if mutation_rate.is_nan() {
        0.0
    } else {
        mutation_rate.clamp(0.0, 1.0)
    };

    genome
        .bits()
        .iter()
        .map(|&bit| {
            if rng.random_bool(rate) {
                flip_bit(bit)
            } else {
                bit
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn genome(s: &str) -> Genome {
        s.parse().unwrap()
    }

    // ---- flip_bit ----

    #[test]
    fn test_flip_bit() {
        assert!(flip_bit(false));
        assert!(!flip_bit(true));
    }

    // ---- mutate_genome ----

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = genome("1011001110");
        assert_eq!(mutate_genome(&g, 0.0, &mut rng), g);
    }

    #[test]
    fn test_mutate_rate_one_flips_everything() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = genome("1011001110");
        assert_eq!(mutate_genome(&g, 1.0, &mut rng), genome("0100110001"));
    }

    #[test]
    fn test_mutate_clamps_out_of_range_rates() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = genome("1100");
        assert_eq!(mutate_genome(&g, -3.0, &mut rng), g);
        assert_eq!(mutate_genome(&g, 7.5, &mut rng), genome("0011"));
        assert_eq!(mutate_genome(&g, f64::NAN, &mut rng), g);
    }

    #[test]
    fn test_mutate_does_not_touch_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = genome("0000");
        let _ = mutate_genome(&g, 1.0, &mut rng);
        assert_eq!(g, genome("0000"));
    }

    #[test]
    fn test_mutate_rate_matches_flip_frequency() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Genome::zeros(10_000);
        let flipped = mutate_genome(&g, 0.1, &mut rng).count_ones();
        assert!(
            (800..1200).contains(&flipped),
            "expected about 1000 flips, got {flipped}"
        );
    }

    #[test]
    fn test_mutate_empty_genome() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(mutate_genome(&Genome::default(), 0.5, &mut rng).is_empty());
    }

    // ---- crossover_at ----

    #[test]
    fn test_crossover_at_zero_yields_tail_source() {
        let a = genome("1111");
        let b = genome("0000");
        assert_eq!(crossover_at(&a, &b, 0, Parent::First).unwrap(), b);
        assert_eq!(crossover_at(&a, &b, 0, Parent::Second).unwrap(), a);
    }

    #[test]
    fn test_crossover_at_len_yields_head_source() {
        let a = genome("1111");
        let b = genome("0000");
        assert_eq!(crossover_at(&a, &b, 4, Parent::First).unwrap(), a);
        assert_eq!(crossover_at(&a, &b, 4, Parent::Second).unwrap(), b);
    }

    #[test]
    fn test_crossover_at_interior_point() {
        let a = genome("111111");
        let b = genome("000000");
        assert_eq!(
            crossover_at(&a, &b, 2, Parent::First).unwrap(),
            genome("110000")
        );
        assert_eq!(
            crossover_at(&a, &b, 2, Parent::Second).unwrap(),
            genome("001111")
        );
    }

    #[test]
    fn test_crossover_at_point_out_of_range() {
        let a = genome("11");
        let b = genome("00");
        let err = crossover_at(&a, &b, 3, Parent::First).unwrap_err();
        assert!(matches!(
            err,
            GaError::CrossoverPointOutOfRange { point: 3, len: 2 }
        ));
    }

    // ---- crossover ----

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = crossover(&genome("101"), &genome("10"), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GaError::GenomeLengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_crossover_child_is_splice_of_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Genome::ones(10);
        let b = Genome::zeros(10);

        for _ in 0..200 {
            let child = crossover(&a, &b, &mut rng).unwrap();
            assert_eq!(child.len(), 10);

            // Complementary parents: the child is a run of one value
            // followed by a run of the other.
            let changes = child
                .bits()
                .windows(2)
                .filter(|w| w[0] != w[1])
                .count();
            assert!(changes <= 1, "not a single-point splice: {child}");
        }
    }

    #[test]
    fn test_crossover_reaches_both_pure_copies() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Genome::ones(3);
        let b = Genome::zeros(3);

        let mut saw_a = false;
        let mut saw_b = false;
        for _ in 0..500 {
            let child = crossover(&a, &b, &mut rng).unwrap();
            saw_a |= child == a;
            saw_b |= child == b;
        }
        assert!(saw_a && saw_b, "points 0 and L should both be reachable");
    }

    #[test]
    fn test_crossover_point_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Genome::ones(3);
        let b = Genome::zeros(3);

        // Each (point, head) pair has probability 1/8. Points 0 and 3 both
        // give pure copies, so "111" and "000" collect two pairs each.
        let expected = [
            ("111", 0.25),
            ("000", 0.25),
            ("100", 0.125),
            ("110", 0.125),
            ("011", 0.125),
            ("001", 0.125),
        ];

        let n = 40_000;
        let mut counts = [0u32; 6];
        for _ in 0..n {
            let child = crossover(&a, &b, &mut rng).unwrap().to_string();
            let slot = expected
                .iter()
                .position(|(shape, _)| *shape == child)
                .unwrap_or_else(|| panic!("unexpected child {child}"));
            counts[slot] += 1;
        }

        for ((shape, p), &c) in expected.iter().zip(&counts) {
            let want = p * n as f64;
            assert!(
                (c as f64 - want).abs() < want * 0.08,
                "child {shape} seen {c} times, expected about {want}"
            );
        }
    }

    #[test]
    fn test_crossover_empty_genomes() {
        let mut rng = StdRng::seed_from_u64(42);
        let child = crossover(&Genome::default(), &Genome::default(), &mut rng).unwrap();
        assert!(child.is_empty());
    }

    #[test]
    fn test_parent_random_is_fair() {
        let mut rng = StdRng::seed_from_u64(42);
        let firsts = (0..10_000)
            .filter(|_| Parent::random(&mut rng) == Parent::First)
            .count();
        assert!((4500..5500).contains(&firsts), "got {firsts} firsts");
    }
}
