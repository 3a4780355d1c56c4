//! Gene initialization range
//!
//! Initial genes are drawn uniformly from a half-open interval shared by all
//! dimensions. Mutation is unconstrained, so the range only governs
//! initialization.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};

/// Interval `[lo, hi)` that initial genes are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneRange {
    /// Lower bound (inclusive)
    pub lo: f64,
    /// Upper bound (exclusive)
    pub hi: f64,
}

impl GeneRange {
    /// Create a new range. Use [`GeneRange::validate`] before sampling.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Create a range centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Width of the interval (hi - lo)
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Check if a value lies within `[lo, hi)`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value < self.hi
    }

    /// Reject empty, inverted, non-finite or overflowing ranges
    pub fn validate(&self) -> EvoResult<()> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(EvolutionError::config(
                "gene_range",
                format!("must be finite, got [{}, {})", self.lo, self.hi),
            ));
        }
        if self.lo >= self.hi {
            return Err(EvolutionError::config(
                "gene_range",
                format!("lower bound {} must be below upper bound {}", self.lo, self.hi),
            ));
        }
        if !(self.hi - self.lo).is_finite() {
            return Err(EvolutionError::config(
                "gene_range",
                format!("width of [{}, {}) overflows", self.lo, self.hi),
            ));
        }
        Ok(())
    }

    /// Draw one value uniformly from the range
    ///
    /// # Panics
    /// Panics if the range is empty; validated configurations never are.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.lo..self.hi)
    }
}

impl Default for GeneRange {
    fn default() -> Self {
        Self::symmetric(10.0)
    }
}

impl From<(f64, f64)> for GeneRange {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self::new(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_range_new() {
        let r = GeneRange::new(-5.0, 5.0);
        assert_eq!(r.lo, -5.0);
        assert_eq!(r.hi, 5.0);
        assert_eq!(r.width(), 10.0);
    }

    #[test]
    fn test_range_from_tuple() {
        let r: GeneRange = (-10.0, 10.0).into();
        assert_eq!(r, GeneRange::symmetric(10.0));
        assert_eq!(r, GeneRange::default());
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let r = GeneRange::new(-1.0, 1.0);
        assert!(r.contains(-1.0));
        assert!(r.contains(0.0));
        assert!(!r.contains(1.0));
    }

    #[test]
    fn test_range_validate() {
        assert!(GeneRange::new(-1.0, 1.0).validate().is_ok());
        assert!(GeneRange::new(1.0, 1.0).validate().is_err());
        assert!(GeneRange::new(2.0, -2.0).validate().is_err());
        assert!(GeneRange::new(f64::NAN, 1.0).validate().is_err());
        assert!(GeneRange::new(0.0, f64::INFINITY).validate().is_err());
        assert!(GeneRange::new(-1e308, 1e308).validate().is_err());
        assert!(GeneRange::new(-8e307, 8e307).validate().is_ok());

        match GeneRange::new(3.0, 1.0).validate() {
            Err(EvolutionError::Configuration { parameter, .. }) => {
                assert_eq!(parameter, "gene_range")
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_range_sample_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let r = GeneRange::new(-0.5, 2.5);
        for _ in 0..1000 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }
}
