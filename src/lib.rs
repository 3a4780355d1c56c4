//! # selfadapt-es
//!
//! A self-adaptive (μ,λ) Evolution Strategy for real-valued optimization.
//!
//! Every individual carries its own mutation step size σ, which is mutated
//! log-normally alongside the genes. Parents are picked by binary tournament
//! and the best μ of the λ offspring become the next generation.
//!
//! ## Core Concepts
//!
//! - **Fitness**: any `&[f64] -> f64` scoring function, higher is better
//! - **Self-adaptation**: σ' = σ · exp(τ · N(0, 1)), inherited by the child
//! - **Reproducibility**: all randomness comes from the caller's RNG
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use selfadapt_es::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(5000);
//!
//! let result = EvolutionStrategy::builder()
//!     .mu(15)
//!     .lambda(100)
//!     .dimension(2)
//!     .gene_range((-10.0, 10.0))
//!     .initial_sigma(0.1)
//!     .tau(0.1)
//!     .max_generations(1000)
//!     .fitness(Himmelblau::new())
//!     .build()?
//!     .run_with_telemetry(&mut rng, &mut StdoutTelemetry)?;
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod termination;
pub mod tuning;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::ESConfig;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
    pub use crate::tuning::{ParameterGrid, ParameterSweep, TuningConfig, TuningResult};
}
