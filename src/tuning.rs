//! Parameter sweep
//!
//! Runs the evolution strategy over a grid of (λ, σ₀) settings, several
//! seeded runs per setting, and reports which setting performed best.
//! Runs execute one after another on the calling thread.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::algorithms::evolution_strategy::EvolutionStrategy;
use crate::config::ESConfig;
use crate::diagnostics::telemetry::NullTelemetry;
use crate::error::EvoResult;
use crate::fitness::traits::Fitness;
use crate::genome::bounds::GeneRange;

/// Grid of offspring counts and initial step sizes
///
/// Every grid point uses μ = λ/2; the remaining hyperparameters come from
/// `base`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterGrid {
    /// Offspring counts (λ)
    pub lambdas: Vec<usize>,
    /// Initial step sizes (σ₀)
    pub sigmas: Vec<f64>,
    /// Settings shared by every grid point
    pub base: ESConfig,
}

impl ParameterGrid {
    /// The 5×5 grid used for the 10-dimensional Rosenbrock study
    pub fn es_grid() -> Self {
        let dimension = 10;
        Self {
            lambdas: vec![50, 162, 275, 387, 500],
            sigmas: vec![0.1, 0.575, 1.05, 1.525, 2.0],
            base: ESConfig {
                dimension,
                gene_range: GeneRange::new(-5.12, 5.11),
                tau: ESConfig::default_tau(dimension),
                max_generations: 1000,
                label: "Rosenbrock ES".to_string(),
                ..Default::default()
            },
        }
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.lambdas.len() * self.sigmas.len()
    }

    /// Check if the grid has no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand the grid into configurations, λ-major
    pub fn configs(&self) -> Vec<ESConfig> {
        self.lambdas
            .iter()
            .flat_map(|&lambda| {
                self.sigmas.iter().map(move |&sigma| ESConfig {
                    mu: (lambda / 2).max(1),
                    lambda,
                    initial_sigma: sigma,
                    ..self.base.clone()
                })
            })
            .collect()
    }
}

/// Sweep settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Seeded runs per grid point
    pub num_runs: usize,
    /// Run `i` of every grid point is seeded with `base_seed + i`, wrapping at `u64::MAX`
    pub base_seed: u64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            num_runs: 5,
            base_seed: 5000,
        }
    }
}

/// Outcome of one seeded run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TuningResult {
    /// Index of the grid point
    pub config_index: usize,
    /// Number of parents (μ)
    pub mu: usize,
    /// Number of offspring (λ)
    pub lambda: usize,
    /// Initial step size (σ₀)
    pub initial_sigma: f64,
    /// Repetition number within the grid point
    pub run_id: usize,
    /// RNG seed of the run
    pub seed: u64,
    /// Best fitness among the final parents
    pub best_fitness: f64,
    /// Generations executed
    pub generations: usize,
    /// Fitness evaluations performed
    pub evaluations: usize,
    /// Whether the run stopped early on the mean fitness threshold
    pub converged: bool,
    /// Wall-clock time of the run
    pub execution_time_ms: f64,
}

/// Aggregate over all runs of one grid point
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigSummary {
    /// Index of the grid point
    pub config_index: usize,
    /// Number of parents (μ)
    pub mu: usize,
    /// Number of offspring (λ)
    pub lambda: usize,
    /// Initial step size (σ₀)
    pub initial_sigma: f64,
    /// Number of runs aggregated
    pub runs: usize,
    /// Mean of the per-run best fitness
    pub mean_best_fitness: f64,
    /// Highest per-run best fitness
    pub best_fitness: f64,
    /// Fraction of runs that converged
    pub convergence_rate: f64,
    /// Mean generations per run
    pub mean_generations: f64,
}

impl ConfigSummary {
    /// Rank against another summary: higher mean fitness, then fewer generations
    fn beats(&self, other: &Self) -> bool {
        match self.mean_best_fitness.total_cmp(&other.mean_best_fitness) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.mean_generations < other.mean_generations,
        }
    }
}

/// Sequential parameter sweep over a grid
pub struct ParameterSweep<Fit> {
    grid: ParameterGrid,
    config: TuningConfig,
    fitness: Fit,
}

impl<Fit: Fitness> ParameterSweep<Fit> {
    /// Create a sweep of `grid` against `fitness`
    pub fn new(grid: ParameterGrid, config: TuningConfig, fitness: Fit) -> Self {
        Self {
            grid,
            config,
            fitness,
        }
    }

    /// Run every grid point `num_runs` times
    ///
    /// Fails on the first invalid grid point or failed run.
    pub fn run(&self) -> EvoResult<Vec<TuningResult>> {
        let configs = self.grid.configs();
        let mut results = Vec::with_capacity(configs.len() * self.config.num_runs);

        for (config_index, config) in configs.into_iter().enumerate() {
            let es = EvolutionStrategy::builder()
                .config(config)
                .fitness(&self.fitness)
                .build()?;
            let config = es.config();

            for run_id in 0..self.config.num_runs {
                let seed = self.config.base_seed.wrapping_add(run_id as u64);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let start = Instant::now();
                let result = es.run_with_telemetry(&mut rng, &mut NullTelemetry)?;
                let elapsed = start.elapsed();

                let best_fitness = result
                    .best()
                    .map_or(f64::NEG_INFINITY, |(_, fitness)| fitness);
                tracing::debug!(
                    config_index,
                    lambda = config.lambda,
                    sigma = config.initial_sigma,
                    run_id,
                    best_fitness,
                    generations = result.generations,
                    "tuning run complete"
                );

                results.push(TuningResult {
                    config_index,
                    mu: config.mu,
                    lambda: config.lambda,
                    initial_sigma: config.initial_sigma,
                    run_id,
                    seed,
                    best_fitness,
                    generations: result.generations,
                    evaluations: result.evaluations,
                    converged: result.converged,
                    execution_time_ms: elapsed.as_secs_f64() * 1000.0,
                });
            }
        }

        tracing::info!(runs = results.len(), "parameter sweep complete");
        Ok(results)
    }
}

/// Aggregate results per grid point, in grid order
pub fn summarize(results: &[TuningResult]) -> Vec<ConfigSummary> {
    let mut summaries: Vec<ConfigSummary> = Vec::new();

    for result in results {
        let position = summaries
            .iter()
            .position(|s| s.config_index == result.config_index);
        let summary = match position {
            Some(i) => &mut summaries[i],
            None => {
                summaries.push(ConfigSummary {
                    config_index: result.config_index,
                    mu: result.mu,
                    lambda: result.lambda,
                    initial_sigma: result.initial_sigma,
                    runs: 0,
                    mean_best_fitness: 0.0,
                    best_fitness: f64::NEG_INFINITY,
                    convergence_rate: 0.0,
                    mean_generations: 0.0,
                });
                let last = summaries.len() - 1;
                &mut summaries[last]
            }
        };

        // Running sums; divided below
        summary.runs += 1;
        summary.mean_best_fitness += result.best_fitness;
        summary.best_fitness = summary.best_fitness.max(result.best_fitness);
        summary.convergence_rate += if result.converged { 1.0 } else { 0.0 };
        summary.mean_generations += result.generations as f64;
    }

    for summary in &mut summaries {
        let runs = summary.runs as f64;
        summary.mean_best_fitness /= runs;
        summary.convergence_rate /= runs;
        summary.mean_generations /= runs;
    }

    summaries.sort_by_key(|s| s.config_index);
    summaries
}

/// Grid point with the highest mean best fitness; fewer generations break ties
pub fn best_configuration(results: &[TuningResult]) -> Option<ConfigSummary> {
    summarize(results)
        .into_iter()
        .fold(None, |best: Option<ConfigSummary>, candidate| match best {
            Some(current) if !candidate.beats(&current) => Some(current),
            _ => Some(candidate),
        })
}

/// Human-readable report of the best grid point
pub fn report(results: &[TuningResult]) -> String {
    match best_configuration(results) {
        Some(best) => format!(
            "ES Parameter Tuning:\n\
             - Runs: {}\n\
             - Best configuration: mu={} lambda={} sigma={}\n\
             - Mean best fitness: {:.6}\n\
             - Best single run: {:.6}\n\
             - Convergence rate: {:.0}%\n\
             - Mean generations: {:.1}",
            results.len(),
            best.mu,
            best.lambda,
            best.initial_sigma,
            best.mean_best_fitness,
            best.best_fitness,
            best.convergence_rate * 100.0,
            best.mean_generations
        ),
        None => "ES Parameter Tuning: no runs".to_string(),
    }
}
