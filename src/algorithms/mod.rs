//! Evolutionary algorithms
//!
//! This module provides the self-adaptive (μ,λ) Evolution Strategy.

pub mod evolution_strategy;

pub mod prelude {
    pub use super::evolution_strategy::*;
}
