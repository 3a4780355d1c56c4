//! Benchmark fitness functions
//!
//! This module provides the benchmark functions the strategy is exercised
//! against. Each raw objective is minimized; the [`Fitness`] impls map it
//! onto (0, 1] via [`reciprocal_fitness`] so that higher is better.

use crate::error::GenomeError;
use crate::fitness::traits::{reciprocal_fitness, Fitness};

/// Trait for benchmark functions
pub trait BenchmarkFunction {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Dimensionality of the problem
    fn dimension(&self) -> usize;

    /// Suggested search space bounds (min, max)
    fn bounds(&self) -> (f64, f64);

    /// Known global minimizers
    fn optimal_solutions(&self) -> Vec<Vec<f64>>;

    /// Evaluate the raw objective (returns value to be MINIMIZED)
    fn evaluate_raw(&self, x: &[f64]) -> Result<f64, GenomeError>;
}

/// Himmelblau's function: f(x, y) = (x² + y − 11)² + (x + y² − 7)²
///
/// Two-dimensional, four global minima with f = 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Himmelblau;

impl Himmelblau {
    /// The four global minimizers
    pub const OPTIMA: [(f64, f64); 4] = [
        (3.0, 2.0),
        (-2.805118, 3.131312),
        (-3.779310, -3.283186),
        (3.584428, -1.848126),
    ];

    /// Create a new Himmelblau function
    pub fn new() -> Self {
        Self
    }

    /// Distance from a point to the closest global minimizer
    pub fn distance_to_nearest_optimum(x: f64, y: f64) -> f64 {
        Self::OPTIMA
            .iter()
            .map(|(ox, oy)| ((x - ox).powi(2) + (y - oy).powi(2)).sqrt())
            .fold(f64::INFINITY, f64::min)
    }
}

impl BenchmarkFunction for Himmelblau {
    fn name(&self) -> &'static str {
        "Himmelblau"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn bounds(&self) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn optimal_solutions(&self) -> Vec<Vec<f64>> {
        Self::OPTIMA.iter().map(|&(x, y)| vec![x, y]).collect()
    }

    fn evaluate_raw(&self, x: &[f64]) -> Result<f64, GenomeError> {
        match x {
            [x, y] => Ok((x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)),
            _ => Err(GenomeError::DimensionMismatch {
                expected: 2,
                actual: x.len(),
            }),
        }
    }
}

impl Fitness for Himmelblau {
    fn evaluate(&self, genes: &[f64]) -> Result<f64, GenomeError> {
        self.evaluate_raw(genes).map(reciprocal_fitness)
    }
}

/// Rosenbrock function: f(x) = Σ[(1 − xᵢ)² + 100(xᵢ₊₁ − xᵢ²)²]
///
/// Valley structure, non-separable. Optimum at (1, 1, ..., 1).
#[derive(Clone, Debug)]
pub struct Rosenbrock {
    dimension: usize,
}

impl Rosenbrock {
    /// Create a new Rosenbrock function
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self::new(2)
    }
}

impl BenchmarkFunction for Rosenbrock {
    fn name(&self) -> &'static str {
        "Rosenbrock"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bounds(&self) -> (f64, f64) {
        (-5.12, 5.11)
    }

    fn optimal_solutions(&self) -> Vec<Vec<f64>> {
        vec![vec![1.0; self.dimension]]
    }

    fn evaluate_raw(&self, x: &[f64]) -> Result<f64, GenomeError> {
        if x.len() < 2 {
            return Err(GenomeError::DimensionTooSmall {
                minimum: 2,
                actual: x.len(),
            });
        }
        Ok(x
            .windows(2)
            .map(|w| (1.0 - w[0]).powi(2) + 100.0 * (w[1] - w[0] * w[0]).powi(2))
            .sum())
    }
}

impl Fitness for Rosenbrock {
    fn evaluate(&self, genes: &[f64]) -> Result<f64, GenomeError> {
        self.evaluate_raw(genes).map(reciprocal_fitness)
    }
}

/// MaxOnes on a real-valued genome
///
/// MaxOnes is a bitstring problem; on real genes it carries no signal and
/// always scores 0.0.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOnes;

impl Fitness for MaxOnes {
    fn evaluate(&self, _genes: &[f64]) -> Result<f64, GenomeError> {
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_himmelblau_at_optima() {
        let h = Himmelblau::new();
        assert_relative_eq!(h.evaluate(&[3.0, 2.0]).unwrap(), 1.0);
        for (x, y) in Himmelblau::OPTIMA {
            assert!(h.evaluate_raw(&[x, y]).unwrap() < 1e-8);
            assert_relative_eq!(h.evaluate(&[x, y]).unwrap(), 1.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_himmelblau_non_optimum() {
        let h = Himmelblau::new();
        // (0 + 0 - 11)^2 + (0 + 0 - 7)^2 = 121 + 49 = 170
        assert_relative_eq!(h.evaluate_raw(&[0.0, 0.0]).unwrap(), 170.0);
        assert_relative_eq!(h.evaluate(&[0.0, 0.0]).unwrap(), 1.0 / 171.0);
    }

    #[test]
    fn test_himmelblau_rejects_wrong_dimension() {
        let h = Himmelblau::new();
        assert_eq!(
            h.evaluate(&[1.0, 2.0, 3.0]),
            Err(GenomeError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_himmelblau_distance_to_nearest_optimum() {
        assert_relative_eq!(Himmelblau::distance_to_nearest_optimum(3.0, 2.0), 0.0);
        assert_relative_eq!(
            Himmelblau::distance_to_nearest_optimum(3.0, 2.5),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_himmelblau_metadata() {
        let h = Himmelblau::new();
        assert_eq!(h.name(), "Himmelblau");
        assert_eq!(h.dimension(), 2);
        assert_eq!(h.bounds(), (-10.0, 10.0));
        assert_eq!(h.optimal_solutions().len(), 4);
    }

    #[test]
    fn test_rosenbrock_at_optimum() {
        let r = Rosenbrock::new(10);
        assert_relative_eq!(r.evaluate(&[1.0; 10]).unwrap(), 1.0);
    }

    #[test]
    fn test_rosenbrock_non_optimum() {
        let r = Rosenbrock::new(2);
        // (1 - 0)^2 + 100 * (0 - 0)^2 = 1
        assert_relative_eq!(r.evaluate_raw(&[0.0, 0.0]).unwrap(), 1.0);
        assert_relative_eq!(r.evaluate(&[0.0, 0.0]).unwrap(), 0.5);
    }

    #[test]
    fn test_rosenbrock_generalized_sum() {
        let r = Rosenbrock::new(3);
        // pairs (0,1): 1 + 100*1 = 101; (1,2): 0 + 100*1 = 100
        assert_relative_eq!(r.evaluate_raw(&[0.0, 1.0, 2.0]).unwrap(), 201.0);
    }

    #[test]
    fn test_rosenbrock_requires_two_dimensions() {
        let r = Rosenbrock::new(1);
        assert!(matches!(
            r.evaluate(&[1.0]),
            Err(GenomeError::DimensionTooSmall { minimum: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_rosenbrock_metadata() {
        let r = Rosenbrock::new(5);
        assert_eq!(r.name(), "Rosenbrock");
        assert_eq!(r.dimension(), 5);
        assert_eq!(r.optimal_solutions(), vec![vec![1.0; 5]]);
    }

    #[test]
    fn test_max_ones_is_constant_on_real_genes() {
        assert_eq!(MaxOnes.evaluate(&[1.0, -3.0]).unwrap(), 0.0);
        assert_eq!(MaxOnes.evaluate(&[]).unwrap(), 0.0);
    }
}
