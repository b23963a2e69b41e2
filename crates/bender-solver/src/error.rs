//! Error types (spec.md §7).

use thiserror::Error;

/// Failures `bend_splines` can return. Both variants are surfaced
/// immediately, before the integration loop starts; non-convergence is
/// never an error, only a fact recorded in the returned history.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid topology: {0}")]
    Topology(String),
}

impl SolverError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn topology(message: impl Into<String>) -> Self {
        Self::Topology(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
