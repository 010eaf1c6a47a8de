//! The provenance state machine.
//!
//! ```text
//! Host --adapt--> Logical --resolve--> Memory
//! ```
//!
//! Host is the only entry point for external input and Memory is terminal.
//! There are no reverse edges and no shortcut from Host to Memory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProvenanceError, Result};

/// How resolved and trusted a path value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Raw, untrusted input from outside the system.
    Host,
    /// A `(namespace, key)` identifier.
    Logical,
    /// A resolved, hash-tagged in-memory artifact.
    Memory,
}

/// A legal edge of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Adapt,
    Resolve,
}

impl Stage {
    /// The stage raw input enters at.
    pub const INITIAL: Stage = Stage::Host;

    /// Whether no transition leaves this stage.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Memory)
    }

    /// Look up the transition from `self` to `to`.
    pub fn transition(self, to: Stage) -> Result<Transition> {
        match (self, to) {
            (Stage::Host, Stage::Logical) => Ok(Transition::Adapt),
            (Stage::Logical, Stage::Memory) => Ok(Transition::Resolve),
            (from, to) => Err(ProvenanceError::ForbiddenTransition { from, to }),
        }
    }

    /// The stage name, as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Host => "host",
            Stage::Logical => "logical",
            Stage::Memory => "memory",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Transition {
    /// Stage this transition starts from.
    pub const fn source(self) -> Stage {
        match self {
            Transition::Adapt => Stage::Host,
            Transition::Resolve => Stage::Logical,
        }
    }

    /// Stage this transition ends in.
    pub const fn target(self) -> Stage {
        match self {
            Transition::Adapt => Stage::Logical,
            Transition::Resolve => Stage::Memory,
        }
    }
}
