//! Error types for selfadapt-es
//!
//! This module defines all error types used throughout the library.

use std::fmt;

use thiserror::Error;

/// Error type for genome-level failures raised by fitness functions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Genome too short for the function being evaluated
    #[error("Dimension too small: need at least {minimum}, got {actual}")]
    DimensionTooSmall { minimum: usize, actual: usize },

    /// Invalid genome structure
    #[error("Invalid genome structure: {0}")]
    InvalidStructure(String),
}

/// Which part of a generation an evaluated individual belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationRole {
    /// One of the μ parents at the top of the generation
    Parent,
    /// One of the λ offspring produced this generation
    Offspring,
}

impl fmt::Display for EvaluationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => f.write_str("parent"),
            Self::Offspring => f.write_str("offspring"),
        }
    }
}

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Invalid hyperparameter, detected before the first generation
    #[error("Invalid configuration: {parameter} {reason}")]
    Configuration {
        /// Name of the offending hyperparameter
        parameter: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Fitness evaluation failed or produced a non-finite value
    #[error("Fitness evaluation failed in generation {generation} for {role} {index}: {reason}")]
    FitnessEvaluation {
        /// Generation number (1-indexed)
        generation: usize,
        /// Index of the individual within its parent or offspring pool
        index: usize,
        /// Whether the individual was a parent or an offspring
        role: EvaluationRole,
        /// Underlying cause
        reason: String,
    },

    /// Serialization of configuration or statistics failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EvolutionError {
    /// Shorthand for a configuration error
    pub fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for EvolutionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
