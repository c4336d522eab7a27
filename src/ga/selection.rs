//! Selection strategies for the GA.
//!
//! Selection builds the breeding pool: a new population of the same size,
//! sampled with replacement from the current one and biased toward higher
//! fitness. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::evaluator::{beats, FitnessEvaluator, FitnessFunction};
use super::types::{FitnessScore, Population};
use crate::error::GaError;
use rand::Rng;

/// Selection strategy for building the breeding pool.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_genalg::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: per slot, draw `k` individuals uniformly with
    /// replacement and keep the fittest. Ties go to the earliest draw.
    ///
    /// - k=1: no pressure (uniform sampling)
    /// - k=2-5: light to moderate pressure
    /// - k>5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(k) evaluations per slot (most served from the cache)
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Negative fitness values are shifted so the minimum becomes zero
    /// before normalizing. Weights are rescaled by the largest one, so
    /// fitness near `f64::MAX` stays proportional. Non-finite weights count
    /// as zero; when every weight is zero the draw is uniform.
    ///
    /// **Warning**: Susceptible to super-individual dominance when
    /// fitness variance is high.
    Roulette,

    /// Linear rank selection.
    ///
    /// Individuals are sorted by fitness ascending; the i-th lowest gets
    /// weight `i` (1-based), so the fittest gets weight `n`. Immune to the
    /// scaling problems of roulette selection.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Builds a breeding pool of exactly `population.len()` individuals.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<F, R>(
        &self,
        population: &Population,
        evaluator: &mut FitnessEvaluator<F>,
        rng: &mut R,
    ) -> Population
    where
        F: FitnessFunction,
        R: Rng,
    {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let picks = match self {
            Selection::Tournament(k) => tournament(population, *k, evaluator, rng),
            Selection::Roulette => roulette(population, evaluator, rng),
            Selection::Rank => rank(population, evaluator, rng),
        };

        picks
            .into_iter()
            .map(|i| population[i].clone())
            .collect::<Vec<_>>()
            .into()
    }

    /// Checks strategy parameters.
    pub fn validate(&self) -> Result<(), GaError> {
        match self {
            Selection::Tournament(0) => Err(GaError::InvalidTournamentSize(0)),
            _ => Ok(()),
        }
    }
}

/// Tournament selection: one tournament of size `k` per output slot.
fn tournament<F: FitnessFunction, R: Rng>(
    population: &Population,
    k: usize,
    evaluator: &mut FitnessEvaluator<F>,
    rng: &mut R,
) -> Vec<usize> {
    let n = population.len();

    (0..n)
        .map(|_| {
            let mut best_idx = rng.random_range(0..n);
            let mut best_fit = evaluator.evaluate(&population[best_idx]);
            for _ in 1..k {
                let idx = rng.random_range(0..n);
                let fit = evaluator.evaluate(&population[idx]);
                if beats(fit, best_fit) {
                    best_idx = idx;
                    best_fit = fit;
                }
            }
            best_idx
        })
        .collect()
}

/// Roulette wheel selection over shifted fitness values.
///
/// weight_i = fitness_i - min(0, min_fitness)
fn roulette<F: FitnessFunction, R: Rng>(
    population: &Population,
    evaluator: &mut FitnessEvaluator<F>,
    rng: &mut R,
) -> Vec<usize> {
    let fitnesses = evaluator.evaluate_all(population);

    let min_fitness = fitnesses
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .fold(f64::INFINITY, f64::min);
    let shift = if min_fitness < 0.0 { -min_fitness } else { 0.0 };

    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            let w = f + shift;
            if w.is_finite() && w > 0.0 {
                w
            } else {
                0.0
            }
        })
        .collect();

    weighted_draws(&weights, population.len(), rng)
}

/// Linear rank selection: weight = 1-based ascending rank.
fn rank<F: FitnessFunction, R: Rng>(
    population: &Population,
    evaluator: &mut FitnessEvaluator<F>,
    rng: &mut R,
) -> Vec<usize> {
    let n = population.len();
    let fitnesses = evaluator.evaluate_all(population);

    // Stable sort, so equal fitness keeps slot order. NaN ranks lowest.
    let key = |f: FitnessScore| if f.is_nan() { f64::NEG_INFINITY } else { f };
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| key(fitnesses[a]).total_cmp(&key(fitnesses[b])));

    let mut weights = vec![0.0; n];
    for (rank, &idx) in order.iter().enumerate() {
        weights[idx] = (rank + 1) as f64;
    }

    weighted_draws(&weights, n, rng)
}

/// Draws `count` indices with replacement, proportional to `weights`.
///
/// Weights are divided by the largest one first, so the running sum stays
/// finite even when individual weights are near `f64::MAX`. Falls back to
/// uniform draws when the total weight is zero.
fn weighted_draws<R: Rng>(weights: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    let n = weights.len();
    let max_weight = weights.iter().copied().fold(0.0, f64::max);
    let scale = if max_weight > 0.0 { max_weight } else { 1.0 };

    let mut cumulative = Vec::with_capacity(n);
    let mut total = 0.0;
    for &w in weights {
        total += w / scale;
        cumulative.push(total);
    }

    if !(total > 0.0 && total.is_finite()) {
        return (0..count).map(|_| rng.random_range(0..n)).collect();
    }

    (0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            // First slot whose cumulative weight exceeds the threshold.
            cumulative.partition_point(|&c| c <= threshold).min(n - 1)
        })
        .collect()
}
