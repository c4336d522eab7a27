//! Error types for u-genalg.
//!
//! All failures are configuration failures detected before the first epoch.
//! Panics raised by a caller-supplied fitness function are not caught.

use thiserror::Error;

/// Error returned when a [`GaConfig`](crate::ga::GaConfig) is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// The population must hold at least one individual.
    #[error("population_size must be at least 1")]
    InvalidPopulationSize,

    /// Individuals must carry at least one gene.
    #[error("individual_size must be at least 1")]
    InvalidIndividualSize,

    /// A probability parameter fell outside `[0, 1]` (or was NaN).
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    /// Tournament selection needs at least one contestant.
    #[error("tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),

    /// Multi-point crossover needs at least one crossover point.
    #[error("multi-point crossover needs at least 1 point, got {0}")]
    InvalidCrossoverPoints(usize),

    /// Uniform crossover parent ratio fell outside `[0, 1]`.
    #[error("uniform crossover parent ratio must lie in [0, 1], got {0}")]
    InvalidParentRatio(f64),

    /// A run needs a budget of at least one epoch.
    #[error("max_generations must be at least 1")]
    InvalidMaxGenerations,

    /// A time limit of zero would stop the run before it starts.
    #[error("time_limit_ms must be positive or None")]
    InvalidTimeLimit,
}
