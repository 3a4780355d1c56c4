//! Genome support types
//!
//! This module provides the range that real-valued genes are initialized in.

pub mod bounds;

pub mod prelude {
    pub use super::bounds::*;
}
