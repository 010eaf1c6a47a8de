//! Error types for the Kernel.

use admit_kernel_core::CoreError;
use admit_kernel_provenance::ProvenanceError;
use admit_kernel_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during Kernel operations.
///
/// A denied admission is not an error; see [`Decision`](crate::Decision).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Lattice or profile construction error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Registry lookup or argument validation error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Forbidden provenance transition.
    #[error("provenance error: {0}")]
    Provenance(#[from] ProvenanceError),
}

/// Result type for Kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
