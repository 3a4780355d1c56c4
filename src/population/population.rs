//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

use crate::error::{EvaluationRole, EvoResult, EvolutionError};
use crate::fitness::traits::Fitness;
use crate::genome::bounds::GeneRange;
use crate::population::individual::Individual;

/// An ordered collection of individuals
///
/// Order is insertion order. It only matters for tie-breaking inside a
/// single generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create a random population
    ///
    /// Genes are drawn individual by individual, gene by gene, each uniformly
    /// from `range`. Every individual starts with the same `sigma`.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        dimension: usize,
        range: &GeneRange,
        sigma: f64,
        rng: &mut R,
    ) -> Self {
        let individuals = (0..size)
            .map(|_| {
                let genes = (0..dimension).map(|_| range.sample(rng)).collect();
                Individual::new(genes, sigma)
            })
            .collect();
        Self { individuals }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Evaluate every individual in order
    ///
    /// Fails on the first evaluator error or non-finite fitness, naming the
    /// generation, role and index of the offending individual.
    pub fn evaluate<F: Fitness + ?Sized>(
        &self,
        fitness: &F,
        generation: usize,
        role: EvaluationRole,
    ) -> EvoResult<Vec<f64>> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(index, individual)| {
                let value = fitness.evaluate(individual.genes()).map_err(|err| {
                    tracing::warn!(generation, index, %role, error = %err, "fitness evaluation failed");
                    EvolutionError::FitnessEvaluation {
                        generation,
                        index,
                        role,
                        reason: err.to_string(),
                    }
                })?;
                if !value.is_finite() {
                    tracing::warn!(generation, index, %role, value, "non-finite fitness");
                    return Err(EvolutionError::FitnessEvaluation {
                        generation,
                        index,
                        role,
                        reason: format!("non-finite fitness {}", value),
                    });
                }
                Ok(value)
            })
            .collect()
    }

    /// Maximum pairwise Euclidean distance between gene vectors
    ///
    /// Returns 0.0 for fewer than two individuals.
    pub fn diversity(&self) -> f64 {
        let mut diversity = 0.0;
        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                let dist = self.individuals[i].distance(&self.individuals[j]);
                if dist > diversity {
                    diversity = dist;
                }
            }
        }
        diversity
    }

    /// Get the best individual given fitness values aligned with this population
    ///
    /// The first individual wins on ties.
    pub fn best<'a>(&'a self, fitness: &[f64]) -> Option<(&'a Individual, f64)> {
        self.individuals
            .iter()
            .zip(fitness.iter().copied())
            .fold(None, |best, (ind, f)| match best {
                Some((_, best_f)) if best_f >= f => best,
                _ => Some((ind, f)),
            })
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self {
            individuals: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenomeError;
    use crate::fitness::benchmarks::Himmelblau;
    use crate::fitness::traits::FnFitness;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_population() -> Population {
        Population::from_individuals(vec![
            Individual::new(vec![0.0, 0.0], 0.1),
            Individual::new(vec![3.0, 4.0], 0.1),
            Individual::new(vec![1.0, 1.0], 0.1),
        ])
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let range = GeneRange::new(-10.0, 10.0);
        let pop = Population::random(15, 2, &range, 0.1, &mut rng);

        assert_eq!(pop.len(), 15);
        for ind in pop.iter() {
            assert_eq!(ind.dimension(), 2);
            assert_eq!(ind.sigma(), 0.1);
            assert!(ind.genes().iter().all(|g| range.contains(*g)));
        }
    }

    #[test]
    fn test_random_population_is_reproducible() {
        let range = GeneRange::new(-1.0, 1.0);
        let a = Population::random(5, 3, &range, 1.0, &mut ChaCha8Rng::seed_from_u64(1));
        let b = Population::random(5, 3, &range, 1.0, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_diversity_is_max_pairwise_distance() {
        let pop = create_population();
        assert_relative_eq!(pop.diversity(), 5.0);
    }

    #[test]
    fn test_diversity_zero_for_identical_genes() {
        let pop = Population::from_individuals(vec![
            Individual::new(vec![2.0, 2.0], 0.1),
            Individual::new(vec![2.0, 2.0], 5.0),
        ]);
        assert_eq!(pop.diversity(), 0.0);
        assert_eq!(Population::new().diversity(), 0.0);
    }

    #[test]
    fn test_evaluate_in_order() {
        let pop = create_population();
        let fitness = FnFitness::new(|g: &[f64]| g[0] + g[1]);
        let values = pop.evaluate(&fitness, 1, EvaluationRole::Parent).unwrap();
        assert_eq!(values, vec![0.0, 7.0, 2.0]);
    }

    #[test]
    fn test_evaluate_rejects_non_finite() {
        let pop = create_population();
        let fitness = FnFitness::new(|g: &[f64]| if g[0] > 2.0 { f64::NAN } else { 1.0 });
        let err = pop
            .evaluate(&fitness, 4, EvaluationRole::Offspring)
            .unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::FitnessEvaluation {
                generation: 4,
                index: 1,
                role: EvaluationRole::Offspring,
                ..
            }
        ));
    }

    #[test]
    fn test_evaluate_propagates_evaluator_error() {
        let pop = Population::from_individuals(vec![Individual::new(vec![1.0, 2.0, 3.0], 0.1)]);
        let err = pop
            .evaluate(&Himmelblau, 1, EvaluationRole::Parent)
            .unwrap_err();
        let expected = GenomeError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        match err {
            EvolutionError::FitnessEvaluation { index, reason, .. } => {
                assert_eq!(index, 0);
                assert_eq!(reason, expected.to_string());
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_best_prefers_first_on_tie() {
        let pop = create_population();
        let (best, f) = pop.best(&[1.0, 3.0, 3.0]).unwrap();
        assert_eq!(f, 3.0);
        assert_eq!(best.genes(), &[3.0, 4.0]);
        assert!(Population::new().best(&[]).is_none());
    }
}
