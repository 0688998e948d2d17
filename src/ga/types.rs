//! Core data types: [`Genome`], [`Individual`], and [`Population`].
//!
//! Genomes and individuals are plain owned values. Operators never modify
//! a genome in place; they build a new one. This keeps parallel evaluation
//! free of shared mutable state.

use crate::error::GaError;
use std::fmt;
use std::str::FromStr;

/// A fixed-length sequence of bits representing a candidate solution.
///
/// A genome is immutable once constructed. Display and parsing use a
/// `0`/`1` string, most significant position first:
///
/// ```
/// use u_bitga::ga::Genome;
///
/// let genome: Genome = "10110".parse().unwrap();
/// assert_eq!(genome.len(), 5);
/// assert_eq!(genome.count_ones(), 3);
/// assert_eq!(genome.to_string(), "10110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Creates a genome from its bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates an all-zeros genome of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Creates an all-ones genome of the given length.
    pub fn ones(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    /// The bits of this genome.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the genome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// Positions past the shorter genome are not counted.
    pub fn hamming_distance(&self, other: &Genome) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Consumes the genome, returning its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidGenome(format!(
                    "unexpected character {other:?} at position {i}"
                ))),
            })
            .collect()
    }
}

/// A genome paired with its (possibly unset) fitness.
///
/// Fitness is `None` until the individual passes through the evaluator.
/// Higher fitness is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The candidate solution.
    pub genome: Genome,

    /// Score assigned by the last evaluation, if any.
    pub fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// Returns a copy carrying the given fitness.
    pub fn with_fitness(&self, fitness: f64) -> Self {
        Self {
            genome: self.genome.clone(),
            fitness: Some(fitness),
        }
    }

    /// Whether this individual has been scored.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }
}

/// The individuals alive in one generation, in order.
pub type Population = Vec<Individual>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Genome::zeros(4).bits(), &[false; 4]);
        assert_eq!(Genome::ones(3).count_ones(), 3);
        assert!(Genome::default().is_empty());
    }

    #[test]
    fn test_display_and_parse() {
        let genome = Genome::new(vec![true, false, false, true]);
        assert_eq!(genome.to_string(), "1001");
        let parsed: Genome = "1001".parse().unwrap();
        assert_eq!(parsed, genome);
    }

    #[test]
    fn test_parse_empty() {
        let parsed: Genome = "".parse().unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        let err = "10x1".parse::<Genome>().unwrap_err();
        assert!(matches!(err, GaError::InvalidGenome(_)));
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_get() {
        let genome: Genome = "01".parse().unwrap();
        assert_eq!(genome.get(0), Some(false));
        assert_eq!(genome.get(1), Some(true));
        assert_eq!(genome.get(2), None);
    }

    #[test]
    fn test_hamming_distance() {
        let a: Genome = "1100".parse().unwrap();
        let b: Genome = "1010".parse().unwrap();
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.hamming_distance(&a), 0);
    }

    #[test]
    fn test_individual_starts_unevaluated() {
        let ind = Individual::new(Genome::ones(2));
        assert!(!ind.is_evaluated());

        let scored = ind.with_fitness(2.0);
        assert_eq!(scored.fitness, Some(2.0));
        assert_eq!(scored.genome, ind.genome);
        assert!(ind.fitness.is_none());
    }
}
