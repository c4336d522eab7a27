//! Memoizing fitness evaluation.
//!
//! [`FitnessEvaluator`] wraps the caller's fitness function with a cache
//! keyed by individual content. While the cache is unbounded the wrapped
//! function is invoked at most once per distinct individual over the
//! evaluator's lifetime; this relies on the function being pure.

use super::types::{FitnessScore, Individual, Population};
use ahash::AHashMap;

/// A fitness function over bit-vector individuals. Higher is better.
///
/// Implemented for every `Fn(&Individual) -> f64`, so closures can be
/// passed directly:
///
/// ```
/// use u_genalg::ga::{FitnessFunction, Individual};
///
/// let onemax = |ind: &Individual| ind.count_ones() as f64;
/// assert_eq!(onemax.fitness(&Individual::from_bits(&[1, 1, 0])), 2.0);
/// ```
///
/// The function must be deterministic and free of side effects that
/// influence its result; the evaluator caches by content. A panic inside
/// the function propagates to whoever drove the evaluation.
pub trait FitnessFunction {
    /// Scores an individual.
    fn fitness(&self, individual: &Individual) -> FitnessScore;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Individual) -> FitnessScore,
{
    fn fitness(&self, individual: &Individual) -> FitnessScore {
        self(individual)
    }
}

/// Strict "fitter than" used for every comparison in the engine.
///
/// Equal scores do not beat each other, so the incumbent keeps ties. NaN
/// loses to any real score.
pub(crate) fn beats(candidate: FitnessScore, incumbent: FitnessScore) -> bool {
    candidate > incumbent || (incumbent.is_nan() && !candidate.is_nan())
}

/// Fitness function wrapped with a content-keyed cache.
#[derive(Debug)]
pub struct FitnessEvaluator<F> {
    function: F,
    cache: AHashMap<Individual, FitnessScore>,
    capacity: Option<usize>,
    evaluations: usize,
    cache_hits: usize,
}

impl<F: FitnessFunction> FitnessEvaluator<F> {
    /// Creates an evaluator with an unbounded cache.
    pub fn new(function: F) -> Self {
        Self::with_capacity(function, None)
    }

    /// Creates an evaluator whose cache holds at most `capacity` entries.
    ///
    /// When the cache is full and a new individual has to be stored, the
    /// whole cache is flushed first. `Some(0)` disables caching; `None`
    /// means unbounded.
    pub fn with_capacity(function: F, capacity: Option<usize>) -> Self {
        Self {
            function,
            cache: AHashMap::new(),
            capacity,
            evaluations: 0,
            cache_hits: 0,
        }
    }

    /// Returns the fitness of `individual`, calling the wrapped function
    /// only on a cache miss.
    pub fn evaluate(&mut self, individual: &Individual) -> FitnessScore {
        if let Some(&score) = self.cache.get(individual) {
            self.cache_hits += 1;
            return score;
        }

        let score = self.function.fitness(individual);
        self.evaluations += 1;

        match self.capacity {
            Some(0) => {}
            Some(cap) if self.cache.len() >= cap => {
                tracing::trace!(entries = self.cache.len(), "fitness cache full, flushing");
                self.cache.clear();
                self.cache.insert(individual.clone(), score);
            }
            _ => {
                self.cache.insert(individual.clone(), score);
            }
        }
        score
    }

    /// Evaluates every individual and returns `(index, score)` of the best.
    ///
    /// Ties go to the earliest index. NaN scores never beat a real score.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn find_fittest(&mut self, population: &Population) -> (usize, FitnessScore) {
        assert!(!population.is_empty(), "cannot rank an empty population");

        let mut best_idx = 0;
        let mut best = self.evaluate(&population[0]);
        for (i, ind) in population.iter().enumerate().skip(1) {
            let score = self.evaluate(ind);
            if beats(score, best) {
                best_idx = i;
                best = score;
            }
        }
        (best_idx, best)
    }

    /// Evaluates every individual in slot order.
    pub fn evaluate_all(&mut self, population: &Population) -> Vec<FitnessScore> {
        population.iter().map(|ind| self.evaluate(ind)).collect()
    }

    /// Number of times the wrapped fitness function has been called.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of lookups answered from the cache.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// Number of individuals currently cached.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
