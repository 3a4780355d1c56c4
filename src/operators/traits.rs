//! Operator traits
//!
//! This module defines the operator seams of the evolution strategy.

use rand::Rng;

use crate::population::individual::Individual;

/// Parent selection operator trait
///
/// Picks one parent index given the fitness of every parent.
pub trait SelectionOperator {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual.
    fn select<R: Rng + ?Sized>(&self, fitness: &[f64], rng: &mut R) -> usize;

    /// Select multiple individuals from the population
    fn select_many<R: Rng + ?Sized>(&self, fitness: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
        (0..count).map(|_| self.select(fitness, rng)).collect()
    }
}

/// Survivor selection operator trait
///
/// Deterministically picks which candidates make up the next generation.
pub trait SurvivorSelection {
    /// Indices of the `count` survivors, best first
    fn survivors(&self, fitness: &[f64], count: usize) -> Vec<usize>;
}

/// Mutation operator trait
///
/// Builds a child from a parent without modifying the parent.
pub trait MutationOperator {
    /// Produce a mutated copy of `parent`
    fn mutate<R: Rng + ?Sized>(&self, parent: &Individual, rng: &mut R) -> Individual;
}
