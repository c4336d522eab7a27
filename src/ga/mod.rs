//! Binary Genetic Algorithm.
//!
//! Evolves a fixed-size population of fixed-length bit vectors against a
//! caller-supplied fitness function (higher is better). Each epoch runs
//! selection, pairwise crossover, full replacement, and bit-flip mutation
//! that spares the epoch's fittest individual; the best individual ever
//! observed is tracked separately.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (sizes, rates, strategies, seed)
//! - [`GaEngine`]: Caller-driven engine, one [`run_epoch`](GaEngine::run_epoch) at a time
//! - [`GaRunner`]: Complete runs with termination conditions
//! - [`FitnessEvaluator`]: Content-keyed fitness cache
//!
//! # Strategies
//!
//! - [`Selection`]: Tournament, roulette wheel, rank
//! - [`crossover`]: One-point, multi-point, uniform
//! - [`Mutation`]: Independent per-gene bit flips
//! - [`EarlyStopping`]: Patience-based stagnation detection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod crossover;
mod early_stop;
mod engine;
mod evaluator;
mod mutation;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use crossover::Crossover;
pub use early_stop::EarlyStopping;
pub use engine::GaEngine;
pub use evaluator::{FitnessEvaluator, FitnessFunction};
pub use mutation::Mutation;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{FitnessScore, Gene, Individual, Population};
