//! Bit-flip mutation.

use super::types::Population;
use rand::Rng;

/// Independent per-gene bit-flip mutation.
///
/// Every gene of every individual flips with probability `rate`. One whole
/// individual may be protected, which is how the engine keeps the current
/// epoch's fittest individual intact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutation {
    rate: f64,
}

impl Mutation {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mutates `population` in place, skipping the individual at `protect`.
    ///
    /// Returns the number of flipped genes.
    pub fn mutate<R: Rng>(
        &self,
        population: &mut Population,
        protect: Option<usize>,
        rng: &mut R,
    ) -> usize {
        let mut flipped = 0;
        for (i, ind) in population.individuals_mut().iter_mut().enumerate() {
            if Some(i) == protect {
                continue;
            }
            for gene in ind.genes_mut() {
                if rng.random_range(0.0..1.0) < self.rate {
                    *gene = !*gene;
                    flipped += 1;
                }
            }
        }
        flipped
    }
}
