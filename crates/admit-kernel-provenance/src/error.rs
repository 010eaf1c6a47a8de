//! Error types for the provenance model.

use thiserror::Error;

use crate::stage::Stage;

/// Errors that can occur when moving a path between provenance stages.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProvenanceError {
    /// The requested stage transition is not an edge of the machine.
    ///
    /// Never retried: route host input through `adapt` and then `resolve`.
    #[error("forbidden transition: {from} -> {to}")]
    ForbiddenTransition { from: Stage, to: Stage },
}

/// Result type for provenance operations.
pub type Result<T> = std::result::Result<T, ProvenanceError>;
