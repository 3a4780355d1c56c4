//! Self-adaptive (μ,λ) Evolution Strategy
//!
//! Each generation evaluates the μ parents, breeds λ offspring through
//! binary tournament selection and self-adaptive Gaussian mutation, then
//! keeps the best μ offspring as the next parents. Parents never survive
//! into the next generation.
//!
//! Randomness is drawn from the caller's RNG in a fixed order: initial genes
//! individual by individual, then per child the tournament sample, the gene
//! perturbations and finally the step-size draw. The same seed and
//! configuration therefore reproduce a run exactly.

use std::time::Instant;

use rand::Rng;

use crate::config::ESConfig;
use crate::diagnostics::telemetry::{TelemetrySink, TracingTelemetry};
use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvaluationRole, EvoResult, EvolutionError};
use crate::fitness::traits::Fitness;
use crate::genome::bounds::GeneRange;
use crate::operators::mutation::SelfAdaptiveMutation;
use crate::operators::selection::{TournamentSelection, TruncationSelection};
use crate::operators::traits::{MutationOperator, SelectionOperator, SurvivorSelection};
use crate::population::population::Population;
use crate::termination::{
    EvolutionState, MeanFitnessThreshold, NeverTerminate, TerminationCriterion,
};

/// Builder for Evolution Strategy
pub struct ESBuilder<Fit, Term> {
    config: ESConfig,
    fitness: Option<Fit>,
    termination: Term,
}

impl ESBuilder<(), NeverTerminate> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ESConfig::default(),
            fitness: None,
            termination: NeverTerminate,
        }
    }

    /// Create a (μ,λ)-ES builder
    pub fn mu_comma_lambda(mu: usize, lambda: usize) -> EvoResult<Self> {
        Ok(Self {
            config: ESConfig::mu_comma_lambda(mu, lambda)?,
            fitness: None,
            termination: NeverTerminate,
        })
    }
}

impl Default for ESBuilder<(), NeverTerminate> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Fit, Term> ESBuilder<Fit, Term> {
    /// Replace the whole configuration
    pub fn config(mut self, config: ESConfig) -> Self {
        self.config = config;
        self
    }

    /// Set μ (number of parents)
    pub fn mu(mut self, mu: usize) -> Self {
        self.config.mu = mu;
        self
    }

    /// Set λ (number of offspring)
    pub fn lambda(mut self, lambda: usize) -> Self {
        self.config.lambda = lambda;
        self
    }

    /// Set the number of genes per individual
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.config.dimension = dimension;
        self
    }

    /// Set the interval initial genes are drawn from
    pub fn gene_range(mut self, range: impl Into<GeneRange>) -> Self {
        self.config.gene_range = range.into();
        self
    }

    /// Set the initial step size
    pub fn initial_sigma(mut self, sigma: f64) -> Self {
        self.config.initial_sigma = sigma;
        self
    }

    /// Set the step-size learning rate τ
    pub fn tau(mut self, tau: f64) -> Self {
        self.config.tau = tau;
        self
    }

    /// Set the generation cap
    pub fn max_generations(mut self, max: usize) -> Self {
        self.config.max_generations = max;
        self
    }

    /// Set the mean parent fitness that stops the run early
    pub fn convergence_threshold(mut self, threshold: f64) -> Self {
        self.config.convergence_threshold = threshold;
        self
    }

    /// Set the telemetry label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    /// Set the fitness function
    pub fn fitness<NewFit>(self, fitness: NewFit) -> ESBuilder<NewFit, Term>
    where
        NewFit: Fitness,
    {
        ESBuilder {
            config: self.config,
            fitness: Some(fitness),
            termination: self.termination,
        }
    }

    /// Add an early-stop criterion checked alongside the mean fitness threshold
    pub fn termination<NewTerm>(self, termination: NewTerm) -> ESBuilder<Fit, NewTerm>
    where
        NewTerm: TerminationCriterion,
    {
        ESBuilder {
            config: self.config,
            fitness: self.fitness,
            termination,
        }
    }
}

impl<Fit, Term> ESBuilder<Fit, Term>
where
    Fit: Fitness,
    Term: TerminationCriterion,
{
    /// Build the Evolution Strategy instance
    pub fn build(self) -> EvoResult<EvolutionStrategy<Fit, Term>> {
        let fitness = self
            .fitness
            .ok_or_else(|| EvolutionError::config("fitness", "must be specified"))?;

        self.config.validate()?;

        Ok(EvolutionStrategy {
            selection: TournamentSelection::binary(),
            survivors: TruncationSelection::new(),
            mutation: SelfAdaptiveMutation::new(self.config.tau),
            early_stop: MeanFitnessThreshold::new(self.config.convergence_threshold),
            config: self.config,
            fitness,
            termination: self.termination,
        })
    }
}

/// Self-adaptive (μ,λ) Evolution Strategy
///
/// Built through [`ESBuilder`]; the configuration is validated once at build
/// time and stays fixed for every run.
pub struct EvolutionStrategy<Fit, Term = NeverTerminate> {
    config: ESConfig,
    fitness: Fit,
    termination: Term,
    early_stop: MeanFitnessThreshold,
    selection: TournamentSelection,
    survivors: TruncationSelection,
    mutation: SelfAdaptiveMutation,
}

impl EvolutionStrategy<(), NeverTerminate> {
    /// Create a builder for Evolution Strategy
    pub fn builder() -> ESBuilder<(), NeverTerminate> {
        ESBuilder::new()
    }
}

impl<Fit, Term> EvolutionStrategy<Fit, Term>
where
    Fit: Fitness,
    Term: TerminationCriterion,
{
    /// Get the run configuration
    pub fn config(&self) -> &ESConfig {
        &self.config
    }

    /// Get the fitness function
    pub fn fitness(&self) -> &Fit {
        &self.fitness
    }

    /// Run the evolution strategy, publishing telemetry as `tracing` events
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        self.run_with_telemetry(rng, &mut TracingTelemetry)
    }

    /// Run the evolution strategy, publishing one record per generation to `sink`
    pub fn run_with_telemetry<R, S>(&self, rng: &mut R, sink: &mut S) -> EvoResult<EvolutionResult>
    where
        R: Rng + ?Sized,
        S: TelemetrySink + ?Sized,
    {
        let start_time = Instant::now();
        let config = &self.config;

        tracing::info!(
            label = %config.label,
            mu = config.mu,
            lambda = config.lambda,
            dimension = config.dimension,
            tau = config.tau,
            max_generations = config.max_generations,
            "starting (μ,λ)-ES run"
        );

        let mut parents = Population::random(
            config.mu,
            config.dimension,
            &config.gene_range,
            config.initial_sigma,
            rng,
        );
        // Fitness of the current parents as computed when they were offspring
        let mut survivor_fitness: Vec<f64> = Vec::new();
        let mut stats = EvolutionStats::new();
        let mut evaluations = 0usize;

        for generation in 1..=config.max_generations {
            let parent_fitness = parents.evaluate(&self.fitness, generation, EvaluationRole::Parent)?;
            evaluations += config.mu;

            let offspring: Population = (0..config.lambda)
                .map(|_| {
                    let index = self.selection.select(&parent_fitness, rng);
                    self.mutation.mutate(&parents.individuals()[index], rng)
                })
                .collect();
            let offspring_fitness =
                offspring.evaluate(&self.fitness, generation, EvaluationRole::Offspring)?;
            evaluations += config.lambda;

            let gen_stats = GenerationStats::from_parents(
                &config.label,
                config.mu,
                config.lambda,
                config.tau,
                generation,
                evaluations,
                &parents,
                &parent_fitness,
            );
            sink.emit(&gen_stats);
            tracing::debug!(
                generation,
                evaluations,
                best = gen_stats.best_fitness,
                mean = gen_stats.mean_fitness,
                diversity = gen_stats.diversity,
                "generation complete"
            );
            stats.record(gen_stats);

            if let Some(reason) = self.termination_reason(&stats) {
                tracing::info!(generation, evaluations, reason, "early stop");
                stats.set_termination_reason(reason);
                stats.set_runtime(start_time.elapsed());
                return Ok(EvolutionResult {
                    population: parents,
                    fitness: parent_fitness,
                    generations: generation,
                    evaluations,
                    converged: true,
                    stats,
                });
            }

            let keep = self.survivors.survivors(&offspring_fitness, config.mu);
            survivor_fitness = keep.iter().map(|&i| offspring_fitness[i]).collect();
            let mut offspring: Vec<Option<_>> =
                offspring.into_individuals().into_iter().map(Some).collect();
            parents = keep.iter().filter_map(|&i| offspring[i].take()).collect();
        }

        tracing::info!(
            generations = config.max_generations,
            evaluations,
            "generation limit reached"
        );
        stats.set_termination_reason("Maximum generations reached");
        stats.set_runtime(start_time.elapsed());

        Ok(EvolutionResult {
            population: parents,
            fitness: survivor_fitness,
            generations: config.max_generations,
            evaluations,
            converged: false,
            stats,
        })
    }

    /// Reason of the first early-stop criterion met by the latest generation
    fn termination_reason(&self, stats: &EvolutionStats) -> Option<&'static str> {
        let current = stats.generations.last()?;
        let state = EvolutionState {
            current,
            history: &stats.generations,
        };

        if self.early_stop.should_terminate(&state) {
            Some(self.early_stop.reason())
        } else if self.termination.should_terminate(&state) {
            Some(self.termination.reason())
        } else {
            None
        }
    }
}
