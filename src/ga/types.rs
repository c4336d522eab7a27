//! Bit-vector individuals and fixed-size populations.
//!
//! An [`Individual`] is a fixed-length sequence of binary genes. Two
//! individuals are equal iff every gene matches, and hashing follows the
//! same rule so individuals can key the fitness cache directly.

use rand::Rng;
use std::fmt;
use std::ops::Index;

/// A single binary gene (`true` = 1).
pub type Gene = bool;

/// Scalar fitness. Higher is always better.
pub type FitnessScore = f64;

/// One candidate solution: a fixed-length bit vector.
///
/// # Examples
///
/// ```
/// use u_genalg::ga::Individual;
///
/// let ind = Individual::from_bits(&[1, 0, 1, 1]);
/// assert_eq!(ind.len(), 4);
/// assert_eq!(ind.count_ones(), 3);
/// assert_eq!(ind.to_string(), "1011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<Gene>,
}

impl Individual {
    /// Wraps an existing gene vector.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Builds an individual from 0/1 values. Any non-zero value is a 1.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Draws every gene independently from a fair coin.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True when the individual has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Gene> {
        self.genes.get(index).copied()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Number of genes set to 1.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Genes as 0/1 values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }

    /// Flips the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }
}

impl Index<usize> for Individual {
    type Output = Gene;

    fn index(&self, index: usize) -> &Gene {
        &self.genes[index]
    }
}

impl From<Vec<Gene>> for Individual {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The fixed-size, ordered collection of individuals evolved each epoch.
///
/// Slot order only matters for pairwise crossover, which recombines
/// adjacent slots `(0, 1), (2, 3), ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` random individuals of `individual_size` genes each.
    pub fn random<R: Rng>(size: usize, individual_size: usize, rng: &mut R) -> Self {
        Self {
            individuals: (0..size)
                .map(|_| Individual::random(individual_size, rng))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Number of genes per individual (0 for an empty population).
    pub fn individual_size(&self) -> usize {
        self.individuals.first().map_or(0, Individual::len)
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
