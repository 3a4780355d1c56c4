//! Self-adaptive Gaussian mutation
//!
//! Every gene is perturbed with N(0, σ²) using the parent's own σ. The
//! child's σ is then drawn log-normally around the parent's:
//! σ' = σ · exp(τ · N(0, 1)), one draw per child shared by all genes.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::operators::traits::MutationOperator;
use crate::population::individual::Individual;

/// Log-normal self-adaptive mutation with a single step size per individual
#[derive(Clone, Debug)]
pub struct SelfAdaptiveMutation {
    /// Learning rate τ of the step-size adaptation
    pub tau: f64,
}

impl SelfAdaptiveMutation {
    /// Floor applied to σ' so that exp() underflow cannot drive it to zero
    pub const MIN_SIGMA: f64 = f64::MIN_POSITIVE;

    /// Create a new self-adaptive mutation with learning rate τ
    pub fn new(tau: f64) -> Self {
        assert!(tau > 0.0, "Tau must be positive");
        Self { tau }
    }

    /// Default learning rate for an n-dimensional problem: τ = 1/√(2n)
    pub fn default_tau(n: usize) -> f64 {
        1.0 / (2.0 * n as f64).sqrt()
    }

    /// Create with the default learning rate for dimension n
    pub fn for_dimension(n: usize) -> Self {
        Self::new(Self::default_tau(n))
    }

    /// Derive a child step size from the parent's using a standard normal draw
    pub fn adapt_sigma(&self, sigma: f64, z: f64) -> f64 {
        (sigma * (self.tau * z).exp()).max(Self::MIN_SIGMA)
    }
}

impl MutationOperator for SelfAdaptiveMutation {
    fn mutate<R: Rng + ?Sized>(&self, parent: &Individual, rng: &mut R) -> Individual {
        let sigma = parent.sigma();

        // Genes first, in order, then the single σ draw.
        let genes: Vec<f64> = parent
            .genes()
            .iter()
            .map(|gene| gene + sigma * rng.sample::<f64, _>(StandardNormal))
            .collect();
        let z: f64 = rng.sample(StandardNormal);

        Individual::new(genes, self.adapt_sigma(sigma, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mutation_preserves_dimension_and_parent() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let parent = Individual::new(vec![1.0, 2.0, 3.0], 0.5);
        let mutation = SelfAdaptiveMutation::new(0.1);

        let child = mutation.mutate(&parent, &mut rng);
        assert_eq!(child.dimension(), 3);
        assert_eq!(parent.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(parent.sigma(), 0.5);
        assert_ne!(child.genes(), parent.genes());
    }

    #[test]
    fn test_mutation_draw_order() {
        let parent = Individual::new(vec![1.0, -1.0], 0.25);
        let mutation = SelfAdaptiveMutation::new(0.3);

        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let child = mutation.mutate(&parent, &mut rng);

        let mut replay = ChaCha8Rng::seed_from_u64(17);
        let n0: f64 = replay.sample(StandardNormal);
        let n1: f64 = replay.sample(StandardNormal);
        let z: f64 = replay.sample(StandardNormal);

        assert_eq!(child.genes(), &[1.0 + 0.25 * n0, -1.0 + 0.25 * n1]);
        assert_eq!(child.sigma(), 0.25 * (0.3 * z).exp());
    }

    #[test]
    fn test_adapt_sigma_is_log_normal_step() {
        let mutation = SelfAdaptiveMutation::new(0.5);
        assert_relative_eq!(mutation.adapt_sigma(2.0, 0.0), 2.0);
        assert_relative_eq!(mutation.adapt_sigma(2.0, 1.0), 2.0 * 0.5f64.exp());
        assert_relative_eq!(mutation.adapt_sigma(2.0, -1.0), 2.0 * (-0.5f64).exp());
    }

    #[test]
    fn test_adapt_sigma_never_reaches_zero() {
        let mutation = SelfAdaptiveMutation::new(1000.0);
        let sigma = mutation.adapt_sigma(1e-300, -10.0);
        assert!(sigma > 0.0);
        assert_eq!(sigma, SelfAdaptiveMutation::MIN_SIGMA);
    }

    #[test]
    fn test_default_tau() {
        // τ = 1/√(2·10) ≈ 0.2236
        assert!((SelfAdaptiveMutation::default_tau(10) - 0.2236).abs() < 1e-4);
        assert_relative_eq!(SelfAdaptiveMutation::for_dimension(2).tau, 0.5);
    }

    #[test]
    #[should_panic(expected = "Tau must be positive")]
    fn test_tau_zero() {
        SelfAdaptiveMutation::new(0.0);
    }
}
