//! Termination criteria
//!
//! Early-stop criteria checked once per generation, after telemetry for that
//! generation has been emitted. The generation cap itself is part of the
//! run configuration and is not expressed as a criterion.

use crate::diagnostics::GenerationStats;

/// Evolution state for termination checking
#[derive(Clone, Copy, Debug)]
pub struct EvolutionState<'a> {
    /// Statistics of the generation just completed
    pub current: &'a GenerationStats,
    /// Statistics of every generation so far, `current` included
    pub history: &'a [GenerationStats],
}

impl<'a> EvolutionState<'a> {
    /// Current generation number (1-indexed)
    pub fn generation(&self) -> usize {
        self.current.generation
    }

    /// Total fitness evaluations so far
    pub fn evaluations(&self) -> usize {
        self.current.evaluations
    }
}

/// Termination criterion trait
pub trait TerminationCriterion {
    /// Check if evolution should terminate
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;
}

/// Terminate once the mean parent fitness strictly exceeds a threshold
#[derive(Clone, Debug)]
pub struct MeanFitnessThreshold(pub f64);

impl MeanFitnessThreshold {
    /// Create a new mean fitness criterion
    pub fn new(threshold: f64) -> Self {
        Self(threshold)
    }
}

impl TerminationCriterion for MeanFitnessThreshold {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        state.current.mean_fitness > self.0
    }

    fn reason(&self) -> &'static str {
        "Mean fitness threshold exceeded"
    }
}

/// Never terminate early
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverTerminate;

impl TerminationCriterion for NeverTerminate {
    fn should_terminate(&self, _state: &EvolutionState<'_>) -> bool {
        false
    }

    fn reason(&self) -> &'static str {
        "Never"
    }
}

/// Terminate after a maximum number of fitness evaluations
#[derive(Clone, Debug)]
pub struct MaxEvaluations(pub usize);

impl MaxEvaluations {
    /// Create a new max evaluations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl TerminationCriterion for MaxEvaluations {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        state.evaluations() >= self.0
    }

    fn reason(&self) -> &'static str {
        "Maximum evaluations reached"
    }
}

pub mod prelude {
    pub use super::{
        EvolutionState, MaxEvaluations, MeanFitnessThreshold, NeverTerminate,
        TerminationCriterion,
    };
}
