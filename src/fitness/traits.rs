//! Fitness traits
//!
//! This module defines the fitness evaluation contract consumed by the
//! evolution strategy.

use crate::error::GenomeError;

/// Fitness evaluation trait
///
/// Maps a gene vector to a scalar where higher is better. Implementations
/// must be pure functions of their input so that runs are reproducible for
/// a fixed seed. The engine only ranks the returned values.
pub trait Fitness {
    /// Evaluate fitness of a gene vector (higher = better)
    fn evaluate(&self, genes: &[f64]) -> Result<f64, GenomeError>;
}

impl<T: Fitness + ?Sized> Fitness for &T {
    fn evaluate(&self, genes: &[f64]) -> Result<f64, GenomeError> {
        (**self).evaluate(genes)
    }
}

impl<T: Fitness + ?Sized> Fitness for Box<T> {
    fn evaluate(&self, genes: &[f64]) -> Result<f64, GenomeError> {
        (**self).evaluate(genes)
    }
}

/// A simple function wrapper for fitness evaluation
pub struct FnFitness<F>
where
    F: Fn(&[f64]) -> f64,
{
    f: F,
}

impl<F> FnFitness<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Create a new function-based fitness evaluator
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Fitness for FnFitness<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, genes: &[f64]) -> Result<f64, GenomeError> {
        Ok((self.f)(genes))
    }
}

/// Map a non-negative minimization objective onto (0, 1], higher is better.
///
/// The global minimum of the objective maps to 1.0.
pub fn reciprocal_fitness(raw: f64) -> f64 {
    1.0 / (1.0 + raw)
}
