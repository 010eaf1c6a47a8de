//! Error types for the Admit Kernel Core.

use thiserror::Error;

use crate::dimension::Dimension;
use crate::types::Capability;

/// Errors raised while building lattices and capability profiles.
///
/// Queries against a built lattice never fail; these only surface at
/// construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("bottom element label must not be empty")]
    EmptyBottom,

    #[error("bottom is not absorbing: meet({a}, {b}) is defined as {result}")]
    BottomNotAbsorbing {
        a: Capability,
        b: Capability,
        result: Capability,
    },

    #[error("conflicting definition for meet({a}, {b}): {existing} vs {new}")]
    ConflictingDefinition {
        a: Capability,
        b: Capability,
        existing: Capability,
        new: Capability,
    },

    #[error("missing capability dimension: {0}")]
    MissingDimension(Dimension),

    #[error("unknown capability dimension: {0}")]
    UnknownDimension(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
