//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! The fitness function is not part of the configuration; it is handed to
//! [`GaEngine::new`](super::GaEngine::new) alongside it.

use super::crossover::Crossover;
use super::selection::Selection;
use crate::error::GaError;

/// Configuration for the binary Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_genalg::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.individual_size, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genalg::ga::{Crossover, GaConfig, Selection};
///
/// let config = GaConfig::new(200, 64)
///     .with_selection(Selection::Rank)
///     .with_crossover(Crossover::MultiPoint(3))
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant for the run.
    pub population_size: usize,

    /// Number of genes per individual.
    pub individual_size: usize,

    /// Probability of recombining a pair of the breeding pool (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-gene bit-flip probability (0.0–1.0).
    ///
    /// A common choice is `1 / individual_size`.
    pub mutation_rate: f64,

    /// Selection strategy for building the breeding pool.
    pub selection: Selection,

    /// Crossover strategy for recombining pairs.
    pub crossover: Crossover,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Number of epochs with no improvement before early stopping fires.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Minimum relative improvement to reset the stagnation counter.
    ///
    /// Set to 0.0 to count any improvement (the default).
    pub convergence_threshold: f64,

    /// Maximum number of cached fitness values.
    ///
    /// `None` (the default) keeps every value for the engine's lifetime.
    pub cache_capacity: Option<usize>,

    /// Maximum number of epochs for [`GaRunner`](super::GaRunner).
    pub max_generations: usize,

    /// Optional wall-clock limit in milliseconds for
    /// [`GaRunner`](super::GaRunner), checked between epochs.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            individual_size: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            selection: Selection::default(),
            crossover: Crossover::default(),
            seed: None,
            stagnation_limit: 0,
            convergence_threshold: 0.0,
            cache_capacity: None,
            max_generations: 500,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Default configuration with the given population and individual sizes.
    pub fn new(population_size: usize, individual_size: usize) -> Self {
        Self {
            population_size,
            individual_size,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of genes per individual.
    pub fn with_individual_size(mut self, n: usize) -> Self {
        self.individual_size = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the convergence threshold.
    ///
    /// The stagnation counter is only reset when the relative improvement
    /// exceeds this threshold: `|old - new| / |old| >= threshold`.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold.max(0.0);
        self
    }

    /// Bounds the fitness cache.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Sets the maximum number of epochs for the runner.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`GaEngine::new`](super::GaEngine::new); a rejected
    /// configuration never produces a partially built engine.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::InvalidPopulationSize);
        }
        if self.individual_size == 0 {
            return Err(GaError::InvalidIndividualSize);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        self.selection.validate()?;
        self.crossover.validate()?;
        if self.time_limit_ms == Some(0) {
            return Err(GaError::InvalidTimeLimit);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidRate { name, value })
    }
}
