//! Individual type
//!
//! An individual is a real-valued gene vector carrying its own mutation step
//! size (sigma). Individuals are never edited in place: mutation always
//! builds a new one from a parent.

use serde::{Deserialize, Serialize};

/// One candidate solution: N genes plus a self-adaptive step size
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    genes: Vec<f64>,
    sigma: f64,
}

impl Individual {
    /// Create a new individual from its genes and step size
    pub fn new(genes: Vec<f64>, sigma: f64) -> Self {
        Self { genes, sigma }
    }

    /// Get the decision vector
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Get the mutation step size
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Number of genes (sigma excluded)
    pub fn dimension(&self) -> usize {
        self.genes.len()
    }

    /// Flat N+1 representation: the genes followed by sigma
    pub fn member(&self) -> Vec<f64> {
        let mut member = Vec::with_capacity(self.genes.len() + 1);
        member.extend_from_slice(&self.genes);
        member.push(self.sigma);
        member
    }

    /// Euclidean distance between gene vectors, ignoring sigma
    pub fn distance(&self, other: &Self) -> f64 {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Take the genes out of this individual
    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_individual_new() {
        let ind = Individual::new(vec![1.0, 2.0, 3.0], 0.5);
        assert_eq!(ind.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(ind.sigma(), 0.5);
        assert_eq!(ind.dimension(), 3);
    }

    #[test]
    fn test_individual_member_appends_sigma() {
        let ind = Individual::new(vec![1.0, -2.0], 0.1);
        assert_eq!(ind.member(), vec![1.0, -2.0, 0.1]);
    }

    #[test]
    fn test_individual_distance_ignores_sigma() {
        let a = Individual::new(vec![0.0, 0.0], 0.1);
        let b = Individual::new(vec![3.0, 4.0], 99.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance(&a), 5.0);

        let c = Individual::new(vec![0.0, 0.0], 7.0);
        assert_eq!(a.distance(&c), 0.0);
    }

    #[test]
    fn test_individual_into_genes() {
        let ind = Individual::new(vec![4.0, 5.0], 1.0);
        assert_eq!(ind.into_genes(), vec![4.0, 5.0]);
    }
}
