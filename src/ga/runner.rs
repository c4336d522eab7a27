//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`GaEngine`] through whole runs:
//! epochs repeat until the generation budget is spent, early stopping
//! fires, the time limit passes, or the caller cancels.

use super::config::GaConfig;
use super::engine::GaEngine;
use super::evaluator::FitnessFunction;
use super::types::{FitnessScore, Individual};
use crate::error::GaError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: FitnessScore,

    /// Total number of epochs executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run hit `time_limit_ms`.
    pub timed_out: bool,

    /// Number of fitness-function calls (cache misses).
    pub evaluations: usize,

    /// Best-known fitness at the end of each epoch.
    pub fitness_history: Vec<f64>,
}

/// Executes complete GA runs.
///
/// # Usage
///
/// ```
/// use u_genalg::ga::{GaConfig, GaRunner, Individual};
///
/// let config = GaConfig::new(40, 24)
///     .with_max_generations(60)
///     .with_seed(42);
/// let result = GaRunner::run(&config, |ind: &Individual| ind.count_ones() as f64)?;
/// assert!(result.best_fitness >= 18.0);
/// # Ok::<(), u_genalg::GaError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until a termination condition holds.
    pub fn run<F: FitnessFunction>(config: &GaConfig, fitness: F) -> Result<GaResult, GaError> {
        Self::run_with_cancel(config, fitness, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked between epochs; at least one epoch always runs,
    /// so a result always carries a best individual.
    pub fn run_with_cancel<F: FitnessFunction>(
        config: &GaConfig,
        fitness: F,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        if config.max_generations == 0 {
            return Err(GaError::InvalidMaxGenerations);
        }
        let mut engine = GaEngine::new(config.clone(), fitness)?;

        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        while engine.generation() < config.max_generations {
            engine.run_epoch();

            if engine.early_stop() {
                stagnated = true;
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }
        }

        let (best, best_fitness) = engine
            .get_fittest()
            .map(|(ind, score)| (ind.clone(), score))
            .expect("at least one epoch has run");

        tracing::info!(
            generations = engine.generation(),
            best_fitness,
            stagnated,
            cancelled,
            timed_out,
            evaluations = engine.evaluator().evaluations(),
            "GA run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: engine.generation(),
            stagnated,
            cancelled,
            timed_out,
            evaluations: engine.evaluator().evaluations(),
            fitness_history: engine.fitness_history().to_vec(),
        })
    }
}
