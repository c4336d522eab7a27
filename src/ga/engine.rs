//! Epoch-by-epoch GA execution.
//!
//! [`GaEngine`] owns the population, the fitness cache, and the random
//! source, and advances the search one epoch per [`run_epoch`] call:
//! selection → crossover → replacement → mutation → re-evaluation →
//! best-known update.
//!
//! [`run_epoch`]: GaEngine::run_epoch

use super::config::GaConfig;
use super::early_stop::EarlyStopping;
use super::evaluator::{beats, FitnessEvaluator, FitnessFunction};
use super::mutation::Mutation;
use super::types::{FitnessScore, Individual, Population};
use crate::error::GaError;
use crate::random::create_rng;
use rand::rngs::StdRng;

/// A binary GA whose epochs are driven by the caller.
///
/// All stochastic steps draw from one RNG seeded at construction, so two
/// engines built from the same configuration and seed evolve identically.
///
/// The engine is single-threaded: [`run_epoch`](Self::run_epoch) takes
/// `&mut self` and runs to completion.
///
/// # Usage
///
/// ```
/// use u_genalg::ga::{GaConfig, GaEngine, Individual};
///
/// let config = GaConfig::new(30, 16).with_seed(42);
/// let mut engine = GaEngine::new(config, |ind: &Individual| ind.count_ones() as f64)?;
///
/// for _ in 0..20 {
///     engine.run_epoch();
/// }
/// let (best, score) = engine.get_fittest().expect("at least one epoch ran");
/// assert_eq!(best.count_ones() as f64, score);
/// # Ok::<(), u_genalg::GaError>(())
/// ```
pub struct GaEngine<F> {
    config: GaConfig,
    seed: u64,
    rng: StdRng,
    population: Population,
    evaluator: FitnessEvaluator<F>,
    mutation: Mutation,
    best: Option<(Individual, FitnessScore)>,
    generation: usize,
    fitness_history: Vec<FitnessScore>,
    early_stopping: EarlyStopping,
}

impl<F: FitnessFunction> GaEngine<F> {
    /// Validates `config` and draws the initial population.
    ///
    /// Every gene of the initial population is a fair coin flip from the
    /// engine's RNG.
    pub fn new(config: GaConfig, fitness: F) -> Result<Self, GaError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let population =
            Population::random(config.population_size, config.individual_size, &mut rng);

        tracing::debug!(
            population_size = config.population_size,
            individual_size = config.individual_size,
            selection = ?config.selection,
            crossover = ?config.crossover,
            seed,
            "GA engine initialized"
        );

        Ok(Self {
            evaluator: FitnessEvaluator::with_capacity(fitness, config.cache_capacity),
            mutation: Mutation::new(config.mutation_rate),
            early_stopping: EarlyStopping::new(config.stagnation_limit)
                .with_min_relative_improvement(config.convergence_threshold),
            best: None,
            generation: 0,
            fitness_history: Vec::new(),
            population,
            rng,
            seed,
            config,
        })
    }

    /// Advances the search by one epoch.
    ///
    /// 1. Build a breeding pool with the configured selection strategy
    /// 2. Recombine adjacent pairs with the configured crossover strategy
    /// 3. Replace the population with the pool
    /// 4. Find the fittest individual
    /// 5. Mutate every other individual
    /// 6. Find the fittest again
    /// 7. Record it if it beats the best-known score
    ///
    /// Always returns `true`: there is no failure mode inside an epoch.
    /// A panic in the fitness function propagates to the caller.
    pub fn run_epoch(&mut self) -> bool {
        let mut selected =
            self.config
                .selection
                .select(&self.population, &mut self.evaluator, &mut self.rng);

        self.config
            .crossover
            .apply(&mut selected, self.config.crossover_rate, &mut self.rng);

        self.population = selected;

        let (elite_idx, _) = self.evaluator.find_fittest(&self.population);
        let flipped = self
            .mutation
            .mutate(&mut self.population, Some(elite_idx), &mut self.rng);

        let (fit_idx, fit_score) = self.evaluator.find_fittest(&self.population);
        let improved = match &self.best {
            None => true,
            Some((_, best_score)) => beats(fit_score, *best_score),
        };
        if improved {
            self.best = Some((self.population[fit_idx].clone(), fit_score));
        }

        self.generation += 1;
        let best_score = self.best.as_ref().map_or(fit_score, |(_, s)| *s);
        self.fitness_history.push(best_score);
        self.early_stopping.update(best_score);

        tracing::debug!(
            generation = self.generation,
            epoch_best = fit_score,
            best_known = best_score,
            improved,
            flipped,
            cache_entries = self.evaluator.cache_len(),
            evaluations = self.evaluator.evaluations(),
            "epoch complete"
        );

        true
    }

    /// Best individual and score observed so far.
    ///
    /// `None` until the first epoch has run.
    pub fn get_fittest(&self) -> Option<(&Individual, FitnessScore)> {
        self.best.as_ref().map(|(ind, score)| (ind, *score))
    }

    /// True once the best-known score has stalled for `stagnation_limit`
    /// consecutive epochs. Always false when the limit is 0.
    pub fn early_stop(&self) -> bool {
        self.early_stopping.should_stop()
    }

    /// The current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of epochs run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best-known score after each epoch.
    pub fn fitness_history(&self) -> &[FitnessScore] {
        &self.fitness_history
    }

    /// The caching evaluator, for statistics.
    pub fn evaluator(&self) -> &FitnessEvaluator<F> {
        &self.evaluator
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The seed the RNG was created from (drawn at random when the
    /// configuration had none).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
