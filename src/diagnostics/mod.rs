//! Diagnostics and statistics
//!
//! This module provides per-generation statistics, the run-level collector,
//! and the telemetry sinks that publish one line per generation.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EvoResult;
use crate::population::individual::Individual;
use crate::population::population::Population;

pub mod telemetry;

/// Statistics for a single generation
///
/// Best and mean fitness are taken over the μ parents evaluated at the top
/// of the generation; diversity is the largest pairwise gene distance among
/// those parents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Run label (first telemetry field)
    pub label: String,
    /// Number of parents (μ)
    pub mu: usize,
    /// Number of offspring (λ)
    pub lambda: usize,
    /// Step-size learning rate (τ)
    pub tau: f64,
    /// Generation number (1-indexed)
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best parent fitness
    pub best_fitness: f64,
    /// Mean parent fitness
    pub mean_fitness: f64,
    /// Population diversity
    pub diversity: f64,
}

impl GenerationStats {
    /// Placeholder emitted as the fifth telemetry field
    pub const PLACEHOLDER: &'static str = "0.0";

    /// Compute statistics for the parents of a generation
    ///
    /// `fitness` must be aligned with `population` and non-empty.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parents(
        label: &str,
        mu: usize,
        lambda: usize,
        tau: f64,
        generation: usize,
        evaluations: usize,
        population: &Population,
        fitness: &[f64],
    ) -> Self {
        let best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;

        Self {
            label: label.to_string(),
            mu,
            lambda,
            tau,
            generation,
            evaluations,
            best_fitness: best,
            mean_fitness: mean,
            diversity: population.diversity(),
        }
    }

    /// Render the space-separated telemetry line
    pub fn telemetry_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GenerationStats {
    // Floats use `{:?}` so integral values keep their trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:?} {} {} {} {:?} {:?} {:?}",
            self.label,
            self.mu,
            self.lambda,
            self.tau,
            Self::PLACEHOLDER,
            self.generation,
            self.evaluations,
            self.best_fitness,
            self.mean_fitness,
            self.diversity
        )
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Get the history of diversity values
    pub fn diversity_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.diversity).collect()
    }

    /// Telemetry lines for every recorded generation
    pub fn telemetry_lines(&self) -> Vec<String> {
        self.generations.iter().map(|g| g.telemetry_line()).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Serialize the collected statistics as pretty JSON
    pub fn to_json(&self) -> EvoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        let best = self.best_fitness().unwrap_or(f64::NEG_INFINITY);
        let final_best = self.final_best_fitness().unwrap_or(f64::NEG_INFINITY);
        let evaluations = self.generations.last().map_or(0, |g| g.evaluations);

        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Evaluations: {}\n\
             - Best fitness: {:.6}\n\
             - Final best: {:.6}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            evaluations,
            best,
            final_best,
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

/// Result of an evolution run
#[derive(Clone, Debug)]
pub struct EvolutionResult {
    /// The final μ parents
    pub population: Population,
    /// Fitness of each final parent, aligned with `population`
    pub fitness: Vec<f64>,
    /// Number of generations executed
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Whether the early-stop criterion fired before the generation cap
    pub converged: bool,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// Best final individual and its fitness; the first one wins on ties
    pub fn best(&self) -> Option<(&Individual, f64)> {
        self.population.best(&self.fitness)
    }

    /// Final individuals paired with their fitness
    pub fn ranked(&self) -> Vec<(&Individual, f64)> {
        let mut ranked: Vec<(&Individual, f64)> = self
            .population
            .iter()
            .zip(self.fitness.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

pub mod prelude {
    pub use super::telemetry::*;
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}
