//! Rosenbrock Parameter Sweep
//!
//! This demo runs the self-adaptive ES once on the 10-dimensional Rosenbrock
//! function, then sweeps a reduced (λ, σ₀) grid and reports the setting with
//! the best mean fitness.
//!
//! Rosenbrock's narrow curved valley rewards step sizes that shrink as the
//! population closes in, which is what self-adaptation provides.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selfadapt_es::prelude::*;
use selfadapt_es::tuning;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Rosenbrock ES ===\n");

    const DIM: usize = 10;
    let mut rng = ChaCha8Rng::seed_from_u64(5000);

    let es = EvolutionStrategy::builder()
        .mu(25)
        .lambda(50)
        .dimension(DIM)
        .gene_range((-5.12, 5.11))
        .initial_sigma(0.575)
        .tau(ESConfig::default_tau(DIM))
        .max_generations(1000)
        .label("Rosenbrock ES")
        .fitness(Rosenbrock::new(DIM))
        .build()?;

    let result = es.run_with_telemetry(&mut rng, &mut NullTelemetry)?;
    println!("{}\n", result.stats.summary());

    if let Some((best, fitness)) = result.best() {
        println!("Best fitness: {:.6}", fitness);
        println!("Best sigma:   {:.6e}", best.sigma());
        println!("Best genes:");
        for (i, gene) in best.genes().iter().enumerate() {
            println!("  x[{}] = {:.6}", i, gene);
        }
    }

    println!("\n=== Parameter Sweep ===\n");

    // Two λ values and three σ₀ values, three seeds each
    let mut grid = ParameterGrid::es_grid();
    grid.lambdas = vec![50, 162];
    grid.sigmas = vec![0.1, 1.05, 2.0];
    grid.base.max_generations = 200;

    let sweep = ParameterSweep::new(
        grid,
        TuningConfig {
            num_runs: 3,
            base_seed: 5000,
        },
        Rosenbrock::new(DIM),
    );
    let results = sweep.run()?;

    for summary in tuning::summarize(&results) {
        println!(
            "mu={:>3} lambda={:>3} sigma={:<5} mean best={:.6} converged={:.0}%",
            summary.mu,
            summary.lambda,
            summary.initial_sigma,
            summary.mean_best_fitness,
            summary.convergence_rate * 100.0
        );
    }
    println!("\n{}", tuning::report(&results));

    Ok(())
}
