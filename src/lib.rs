//! Binary-encoded genetic algorithm engine.
//!
//! Provides a bit-vector GA with pluggable operators:
//!
//! - **Selection**: tournament, roulette wheel (with negative-fitness
//!   shifting), and linear rank.
//! - **Crossover**: one-point, multi-point, and uniform, applied to
//!   adjacent pairs of the breeding pool.
//! - **Mutation**: independent bit flips that spare the epoch's elite.
//! - **Fitness caching**: the user's fitness function is called at most
//!   once per distinct individual.
//! - **Early stopping**: patience-based stagnation detection.
//!
//! # Architecture
//!
//! All randomness flows from one seeded RNG owned by the engine, so runs
//! are reproducible from `(config, seed)`. The crate performs no I/O;
//! progress is reported through `tracing` events and left to the caller's
//! subscriber.
//!
//! ```
//! use u_genalg::ga::{GaConfig, GaEngine, Individual};
//!
//! let mut engine = GaEngine::new(
//!     GaConfig::new(20, 10).with_seed(7),
//!     |ind: &Individual| ind.count_ones() as f64,
//! )?;
//! while engine.generation() < 10 {
//!     engine.run_epoch();
//! }
//! println!("{:?}", engine.get_fittest());
//! # Ok::<(), u_genalg::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::GaError;
