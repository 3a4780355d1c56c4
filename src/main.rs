//! Himmelblau driver
//!
//! Runs the reference (15,100)-ES on Himmelblau's function with seed 5000,
//! streaming one telemetry line per generation to stdout, then prints the
//! final population. Logs go to stderr; set `RUST_LOG` to adjust them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selfadapt_es::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> EvoResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(5000);
    let himmelblau = Himmelblau::new();

    let es = EvolutionStrategy::builder()
        .mu(15)
        .lambda(100)
        .dimension(2)
        .gene_range((-10.0, 10.0))
        .initial_sigma(0.1)
        .tau(0.1)
        .max_generations(1000)
        .label("Himmelblau ES")
        .fitness(&himmelblau)
        .build()?;

    let result = es.run_with_telemetry(&mut rng, &mut StdoutTelemetry)?;

    for (member, fitness) in result.population.iter().zip(&result.fitness) {
        println!("ES Member: {:?}, Fitness: {:?}", member.member(), fitness);
    }

    tracing::info!("{}", result.stats.summary());
    Ok(())
}
