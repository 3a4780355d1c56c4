//! Run configuration
//!
//! Hyperparameters of a (μ,λ)-ES run. A configuration is immutable once a
//! run starts; [`ESConfig::validate`] is called by the builder so that bad
//! values surface before the first generation.

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::genome::bounds::GeneRange;
use crate::operators::mutation::SelfAdaptiveMutation;

/// Configuration for the self-adaptive (μ,λ) Evolution Strategy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ESConfig {
    /// Number of parents (μ)
    pub mu: usize,
    /// Number of offspring (λ), must be >= μ
    pub lambda: usize,
    /// Number of genes per individual (N)
    pub dimension: usize,
    /// Interval initial genes are drawn from
    pub gene_range: GeneRange,
    /// Step size every initial individual starts with
    pub initial_sigma: f64,
    /// Learning rate of the step-size adaptation (τ)
    pub tau: f64,
    /// Upper bound on the number of generations
    pub max_generations: usize,
    /// Early stop once mean parent fitness exceeds this value
    pub convergence_threshold: f64,
    /// Label printed as the first telemetry field
    pub label: String,
}

impl Default for ESConfig {
    fn default() -> Self {
        Self {
            mu: 15,
            lambda: 100,
            dimension: 2,
            gene_range: GeneRange::new(-10.0, 10.0),
            initial_sigma: 0.1,
            tau: 0.1,
            max_generations: 1000,
            convergence_threshold: 0.99,
            label: "ES".to_string(),
        }
    }
}

impl ESConfig {
    /// Create a (μ,λ) configuration with the remaining values defaulted
    pub fn mu_comma_lambda(mu: usize, lambda: usize) -> EvoResult<Self> {
        let config = Self {
            mu,
            lambda,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Conventional learning rate for an N-dimensional problem: τ = 1/√(2N)
    pub fn default_tau(dimension: usize) -> f64 {
        SelfAdaptiveMutation::default_tau(dimension)
    }

    /// Check every hyperparameter, naming the first invalid one
    pub fn validate(&self) -> EvoResult<()> {
        if self.mu == 0 {
            return Err(EvolutionError::config("mu", "must be at least 1"));
        }
        if self.lambda == 0 {
            return Err(EvolutionError::config("lambda", "must be at least 1"));
        }
        if self.lambda < self.mu {
            return Err(EvolutionError::config(
                "lambda",
                format!(
                    "({}) must be >= mu ({}) for (μ,λ) selection",
                    self.lambda, self.mu
                ),
            ));
        }
        if self.dimension == 0 {
            return Err(EvolutionError::config("dimension", "must be at least 1"));
        }
        self.gene_range.validate()?;
        if !(self.initial_sigma.is_finite() && self.initial_sigma > 0.0) {
            return Err(EvolutionError::config(
                "initial_sigma",
                format!("must be positive and finite, got {}", self.initial_sigma),
            ));
        }
        if !(self.tau.is_finite() && self.tau > 0.0) {
            return Err(EvolutionError::config(
                "tau",
                format!("must be positive and finite, got {}", self.tau),
            ));
        }
        if self.max_generations == 0 {
            return Err(EvolutionError::config("max_generations", "must be at least 1"));
        }
        if self.convergence_threshold.is_nan() {
            return Err(EvolutionError::config(
                "convergence_threshold",
                "must not be NaN",
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> EvoResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty JSON
    pub fn to_json(&self) -> EvoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
