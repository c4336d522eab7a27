//! OneMax driver: evolve 100 individuals of 50 bits for 20 epochs and print
//! the fittest after each one.
//!
//! ```text
//! RUST_LOG=u_genalg=debug cargo run --example onemax
//! ```

use tracing_subscriber::EnvFilter;
use u_genalg::ga::{GaConfig, GaEngine, Individual};

fn main() -> Result<(), u_genalg::GaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GaConfig::new(100, 50).with_stagnation_limit(10);
    let mut engine = GaEngine::new(config, |ind: &Individual| ind.count_ones() as f64)?;
    println!("seed: {}", engine.seed());

    for epoch in 0..20 {
        engine.run_epoch();
        if let Some((best, score)) = engine.get_fittest() {
            println!("Epoch {epoch}: {best} ({score})");
        }
        if engine.early_stop() {
            println!("no improvement for 10 epochs, stopping");
            break;
        }
    }

    println!(
        "fitness evaluations: {} (cache hits: {})",
        engine.evaluator().evaluations(),
        engine.evaluator().cache_hits()
    );
    Ok(())
}
